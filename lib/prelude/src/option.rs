//! This module defines utilities for working with the `Option` type.

/// Adds inspection methods to the `Option` type.
pub trait OptionOps {
    type Item;
    /// Returns true if option contains Some with value matching given predicate.
    fn contains_if <F> (&self, f:F) -> bool where F : FnOnce(&Self::Item) -> bool;
    /// Returns true if option contains Some with value equal to the given one.
    fn contains_ref    (&self, value:&Self::Item) -> bool where Self::Item : PartialEq;
}

impl<T> OptionOps for Option<T> {
    type Item = T;

    fn contains_if<F>(&self, f:F) -> bool where F : FnOnce(&Self::Item) -> bool {
        self.as_ref().map_or(false,f)
    }

    fn contains_ref(&self, value:&Self::Item) -> bool where Self::Item : PartialEq {
        self.contains_if(|t| t == value)
    }
}



// =============
// === Tests ===
// =============

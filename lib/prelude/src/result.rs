//! This module defines utilities for working with the `Result` type.

/// Adds inspection methods to the `Result` type.
pub trait ResultOps {
    type Value;
    type Error;
    /// Returns true if the result is `Ok` with value matching given predicate.
    fn contains_if     <F> (&self, f:F) -> bool where F : FnOnce(&Self::Value) -> bool;
    /// Returns true if the result is `Err` with error matching given predicate.
    fn contains_err_if <F> (&self, f:F) -> bool where F : FnOnce(&Self::Error) -> bool;
}

impl<V,E> ResultOps for Result<V,E> {
    type Value = V;
    type Error = E;

    fn contains_if<F>(&self, f:F) -> bool where F : FnOnce(&Self::Value) -> bool {
        match self {
            Ok(v)  => f(v),
            Err(_) => false,
        }
    }

    fn contains_err_if<F>(&self, f:F) -> bool where F : FnOnce(&Self::Error) -> bool {
        match self {
            Ok(_)  => false,
            Err(e) => f(e),
        }
    }
}



// =============
// === Tests ===
// =============

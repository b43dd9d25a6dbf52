//! This module defines `OptionEquipped`, the `Option` counterpart of `ResultEquipped`. It shares
//! the same algebra shape and is the target of the `ok`, `err` and `transpose` conversions.

use crate::prelude::*;

use crate::abort;
use crate::result::ResultEquipped;



// ==================
// === OptionKind ===
// ==================

/// Tag of an `Option` value.
#[derive(Clone,Copy,Debug,Display,PartialEq,Eq,Hash)]
pub enum OptionKind { Some, None }

impl OptionKind {
    /// Tag of the given option.
    pub fn of<T>(option:&Option<T>) -> Self {
        match option {
            Some(_) => Self::Some,
            None    => Self::None,
        }
    }
}



// ======================
// === OptionEquipped ===
// ======================

/// Wrapper owning exactly one `Option<T>`. Immutable, see `ResultEquipped` for the conventions.
/// The default value is the absent one.
#[derive(Clone,Copy,Debug,Derivative,PartialEq,Eq,Hash,From,Shrinkwrap)]
#[derivative(Default(bound=""))]
pub struct OptionEquipped<T> {
    option : Option<T>,
}


// === Construction & Accessors ===

impl<T> OptionEquipped<T> {
    pub fn new(option:Option<T>) -> Self {
        Self {option}
    }

    pub fn some(value:T) -> Self {
        Self::new(Some(value))
    }

    pub fn none() -> Self {
        Self::new(None)
    }

    /// The wrapped option.
    pub fn option(&self) -> &Option<T> {
        &self.option
    }

    pub fn into_option(self) -> Option<T> {
        self.option
    }

    pub fn kind(&self) -> OptionKind {
        OptionKind::of(&self.option)
    }

    pub fn is_some(&self) -> bool {
        self.kind() == OptionKind::Some
    }

    pub fn is_none(&self) -> bool {
        self.kind() == OptionKind::None
    }

    pub fn contains(&self, value:&T) -> bool where T : PartialEq {
        self.option.contains_ref(value)
    }

    /// Checks whether a value is present and matches the predicate.
    pub fn contains_if<F>(&self, f:F) -> bool where F : FnOnce(&T) -> bool {
        self.option.contains_if(f)
    }

    pub fn as_ref(&self) -> OptionEquipped<&T> {
        OptionEquipped::new(self.option.as_ref())
    }

    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.option.as_ref().into_iter()
    }
}


// === Transformations ===

impl<T> OptionEquipped<T> {
    pub fn map<U,F>(self, f:F) -> OptionEquipped<U> where F : FnOnce(T) -> U {
        match self.option {
            Some(value) => OptionEquipped::some(f(value)),
            None        => OptionEquipped::none(),
        }
    }

    pub fn map_or<U,F>(self, f:F, default:U) -> U where F : FnOnce(T) -> U {
        match self.option {
            Some(value) => f(value),
            None        => default,
        }
    }

    pub fn map_or_else<U,F,D>(self, f:F, default:D) -> U
    where F : FnOnce(T) -> U,
          D : FnOnce() -> U {
        match self.option {
            Some(value) => f(value),
            None        => default(),
        }
    }

    pub fn and<U>(self, other:Option<U>) -> OptionEquipped<U> {
        match self.option {
            Some(_) => OptionEquipped::new(other),
            None    => OptionEquipped::none(),
        }
    }

    pub fn and_then<U,F>(self, f:F) -> OptionEquipped<U> where F : FnOnce(T) -> Option<U> {
        match self.option {
            Some(value) => OptionEquipped::new(f(value)),
            None        => OptionEquipped::none(),
        }
    }

    pub fn or(self, other:Option<T>) -> Self {
        match self.option {
            Some(value) => Self::some(value),
            None        => Self::new(other),
        }
    }

    pub fn or_else<F>(self, f:F) -> Self where F : FnOnce() -> Option<T> {
        match self.option {
            Some(value) => Self::some(value),
            None        => Self::new(f()),
        }
    }

    /// Present if exactly one of the two options is present.
    pub fn xor(self, other:Option<T>) -> Self {
        match (self.option,other) {
            (Some(value),None) | (None,Some(value)) => Self::some(value),
            _                                       => Self::none(),
        }
    }

    /// Keeps the value only if it matches the predicate.
    pub fn filter<P>(self, predicate:P) -> Self where P : FnOnce(&T) -> bool {
        match self.option {
            Some(value) => Self::new(predicate(&value).as_some(value)),
            None        => Self::none(),
        }
    }

    pub fn zip<U>(self, other:Option<U>) -> OptionEquipped<(T,U)> {
        match (self.option,other) {
            (Some(a),Some(b)) => OptionEquipped::some((a,b)),
            _                 => OptionEquipped::none(),
        }
    }
}


// === Conversions ===

impl<T> OptionEquipped<T> {
    /// Converts into a result, using `error` when the value is absent.
    pub fn ok_or<E>(self, error:E) -> ResultEquipped<T,E> {
        match self.option {
            Some(value) => ResultEquipped::new_ok(value),
            None        => ResultEquipped::new_err(error),
        }
    }

    /// Converts into a result, computing the error only when the value is absent.
    pub fn ok_or_else<E,F>(self, f:F) -> ResultEquipped<T,E> where F : FnOnce() -> E {
        match self.option {
            Some(value) => ResultEquipped::new_ok(value),
            None        => ResultEquipped::new_err(f()),
        }
    }
}


// === Extraction ===

impl<T> OptionEquipped<T> {
    /// Returns the present value.
    ///
    /// # Panics
    /// Panics if the value is absent.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.option {
            Some(value) => value,
            None        => abort::panic("called `OptionEquipped::unwrap()` on a `None` value"),
        }
    }

    /// Like `unwrap`, but panics with `msg`.
    #[track_caller]
    pub fn expect(self, msg:&str) -> T {
        match self.option {
            Some(value) => value,
            None        => abort::panic(msg),
        }
    }

    pub fn unwrap_or(self, default:T) -> T {
        match self.option {
            Some(value) => value,
            None        => default,
        }
    }

    pub fn unwrap_or_else<F>(self, f:F) -> T where F : FnOnce() -> T {
        match self.option {
            Some(value) => value,
            None        => f(),
        }
    }

    pub fn unwrap_or_default(self) -> T where T : Default {
        self.unwrap_or_else(default)
    }
}


// === Structural Composition ===

impl<T,E> OptionEquipped<Result<T,E>> {
    /// Swaps the option and result layers. Absence becomes `Ok(None)`.
    pub fn transpose(self) -> ResultEquipped<Option<T>,E> {
        match self.option {
            None             => ResultEquipped::new_ok(None),
            Some(Ok(value))  => ResultEquipped::new_ok(Some(value)),
            Some(Err(error)) => ResultEquipped::new_err(error),
        }
    }
}

impl<T,E> OptionEquipped<ResultEquipped<T,E>> {
    /// Swaps the option and result layers. Inverse of `ResultEquipped::transpose`.
    pub fn transpose(self) -> ResultEquipped<Option<T>,E> {
        self.map(ResultEquipped::into_result).transpose()
    }
}

impl<T> OptionEquipped<Option<T>> {
    /// Removes one level of option nesting.
    pub fn flatten(self) -> OptionEquipped<T> {
        match self.option {
            Some(inner) => OptionEquipped::new(inner),
            None        => OptionEquipped::none(),
        }
    }
}

impl<T> OptionEquipped<OptionEquipped<T>> {
    /// Removes one level of option nesting.
    pub fn flatten(self) -> OptionEquipped<T> {
        self.map(OptionEquipped::into_option).flatten()
    }
}

impl<T> From<OptionEquipped<T>> for Option<T> {
    fn from(t:OptionEquipped<T>) -> Self {
        t.option
    }
}

impl<T> IntoIterator for OptionEquipped<T> {
    type Item     = T;
    type IntoIter = std::option::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.option.into_iter()
    }
}



// =============
// === Tests ===
// =============

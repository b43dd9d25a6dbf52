//! Raw payload of a result, viewed without its `Ok`/`Err` semantics.

use crate::prelude::*;



// ============
// === Data ===
// ============

/// Union of a success payload and an error payload. Returned by `ResultEquipped::data` for code
/// which wants to inspect whatever the wrapper holds.
#[derive(Clone,Copy,Debug,PartialEq,Eq,Hash)]
pub enum Data<T,E> {
    Value(T),
    Error(E),
}

impl<T,E> Data<T,E> {
    pub fn is_value(&self) -> bool {
        match self {
            Self::Value(_) => true,
            Self::Error(_) => false,
        }
    }

    pub fn is_error(&self) -> bool {
        !self.is_value()
    }

    pub fn as_ref(&self) -> Data<&T,&E> {
        match self {
            Self::Value(value) => Data::Value(value),
            Self::Error(error) => Data::Error(error),
        }
    }

    /// The success payload, if this is one.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Error(_)     => None,
        }
    }

    /// The error payload, if this is one.
    pub fn error(self) -> Option<E> {
        match self {
            Self::Value(_)     => None,
            Self::Error(error) => Some(error),
        }
    }

    pub fn map_value<U,F>(self, f:F) -> Data<U,E> where F : FnOnce(T) -> U {
        match self {
            Self::Value(value) => Data::Value(f(value)),
            Self::Error(error) => Data::Error(error),
        }
    }

    pub fn map_error<U,F>(self, f:F) -> Data<T,U> where F : FnOnce(E) -> U {
        match self {
            Self::Value(value) => Data::Value(value),
            Self::Error(error) => Data::Error(f(error)),
        }
    }

    pub fn into_result(self) -> Result<T,E> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Error(error) => Err(error),
        }
    }
}

impl<T> Data<T,T> {
    /// When both payload types agree the union collapses to a single value.
    pub fn into_inner(self) -> T {
        match self {
            Self::Value(t) | Self::Error(t) => t,
        }
    }
}

impl<T,E> From<Result<T,E>> for Data<T,E> {
    fn from(result:Result<T,E>) -> Self {
        match result {
            Ok(value)  => Self::Value(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<T:Display,E:Display> Display for Data<T,E> {
    fn fmt(&self, f:&mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => Display::fmt(value,f),
            Self::Error(error) => Display::fmt(error,f),
        }
    }
}



// =============
// === Tests ===
// =============

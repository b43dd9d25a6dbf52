//! This module defines `ResultEquipped`, an immutable wrapper over `Result` exposing the full
//! transformation and extraction algebra, and its conversions to `OptionEquipped`.

use crate::prelude::*;

use crate::abort::Abort;
use crate::data::Data;
use crate::option::OptionEquipped;



// ==================
// === ResultKind ===
// ==================

/// Tag of a `Result` value.
#[derive(Clone,Copy,Debug,Display,PartialEq,Eq,Hash)]
pub enum ResultKind { Ok, Err }

impl ResultKind {
    /// Tag of the given result.
    pub fn of<T,E>(result:&Result<T,E>) -> Self {
        match result {
            Ok(_)  => Self::Ok,
            Err(_) => Self::Err,
        }
    }
}



// ======================
// === ResultEquipped ===
// ======================

/// Wrapper owning exactly one `Result<T,E>`. It never changes after construction, all the
/// transformations consume it and build a new wrapper. Dereferences to the wrapped `Result`.
#[derive(Clone,Copy,Debug,PartialEq,Eq,Hash,From,Shrinkwrap)]
pub struct ResultEquipped<T,E> {
    result : Result<T,E>,
}


// === Construction & Accessors ===

impl<T,E> ResultEquipped<T,E> {
    pub fn new(result:Result<T,E>) -> Self {
        Self {result}
    }

    pub fn new_ok(value:T) -> Self {
        Self::new(Ok(value))
    }

    pub fn new_err(error:E) -> Self {
        Self::new(Err(error))
    }

    /// The wrapped result.
    pub fn result(&self) -> &Result<T,E> {
        &self.result
    }

    pub fn into_result(self) -> Result<T,E> {
        self.result
    }

    pub fn kind(&self) -> ResultKind {
        ResultKind::of(&self.result)
    }

    /// The raw payload. Consult `kind` or match on the variants to interpret it.
    pub fn data(&self) -> Data<&T,&E> {
        self.result.as_ref().into()
    }

    pub fn into_data(self) -> Data<T,E> {
        self.result.into()
    }

    pub fn is_ok(&self) -> bool {
        self.kind() == ResultKind::Ok
    }

    pub fn is_err(&self) -> bool {
        self.kind() == ResultKind::Err
    }

    /// Checks whether this is `Ok` holding a value equal to the given one. An `Err` never
    /// contains anything, even if its payload compares equal.
    pub fn contains(&self, value:&T) -> bool where T : PartialEq {
        self.result.contains_if(|t| t == value)
    }

    /// Checks whether this is `Err` holding an error equal to the given one.
    pub fn contains_err(&self, error:&E) -> bool where E : PartialEq {
        self.result.contains_err_if(|e| e == error)
    }

    /// Borrowing view of the wrapper.
    pub fn as_ref(&self) -> ResultEquipped<&T,&E> {
        ResultEquipped::new(self.result.as_ref())
    }

    /// Iterator over the success payload. Yields nothing for `Err`.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.result.as_ref().ok().into_iter()
    }
}


// === Conversions ===

impl<T,E> ResultEquipped<T,E> {
    /// Converts into an option holding the success payload. The error payload is discarded.
    pub fn ok(self) -> OptionEquipped<T> {
        match self.result {
            Ok(value) => OptionEquipped::some(value),
            Err(_)    => OptionEquipped::none(),
        }
    }

    /// Converts into an option holding the error payload. The success payload is discarded.
    pub fn err(self) -> OptionEquipped<E> {
        match self.result {
            Ok(_)      => OptionEquipped::none(),
            Err(error) => OptionEquipped::some(error),
        }
    }
}


// === Transformations ===

impl<T,E> ResultEquipped<T,E> {
    /// Applies `f` to the success payload. An `Err` is passed through and `f` is not called.
    pub fn map<U,F>(self, f:F) -> ResultEquipped<U,E> where F : FnOnce(T) -> U {
        match self.result {
            Ok(value)  => ResultEquipped::new_ok(f(value)),
            Err(error) => ResultEquipped::new_err(error),
        }
    }

    /// Applies `f` to the error payload. An `Ok` is passed through and `f` is not called.
    pub fn map_err<G,F>(self, f:F) -> ResultEquipped<T,G> where F : FnOnce(E) -> G {
        match self.result {
            Ok(value)  => ResultEquipped::new_ok(value),
            Err(error) => ResultEquipped::new_err(f(error)),
        }
    }

    /// Applies `f` to the success payload, or returns `default` for `Err`.
    pub fn map_or<U,F>(self, f:F, default:U) -> U where F : FnOnce(T) -> U {
        match self.result {
            Ok(value) => f(value),
            Err(_)    => default,
        }
    }

    /// Applies `f` to the success payload, or computes the default for `Err`.
    pub fn map_or_else<U,F,D>(self, f:F, default:D) -> U
    where F : FnOnce(T) -> U,
          D : FnOnce() -> U {
        match self.result {
            Ok(value) => f(value),
            Err(_)    => default(),
        }
    }

    /// Returns `other` if this is `Ok`, otherwise this error.
    pub fn and<U>(self, other:Result<U,E>) -> ResultEquipped<U,E> {
        match self.result {
            Ok(_)      => ResultEquipped::new(other),
            Err(error) => ResultEquipped::new_err(error),
        }
    }

    /// Chains a fallible computation on the success payload. An `Err` short-circuits and `f` is
    /// not called.
    pub fn and_then<U,F>(self, f:F) -> ResultEquipped<U,E> where F : FnOnce(T) -> Result<U,E> {
        match self.result {
            Ok(value)  => ResultEquipped::new(f(value)),
            Err(error) => ResultEquipped::new_err(error),
        }
    }

    /// Returns `other` if this is `Err`, otherwise this value.
    pub fn or<G>(self, other:Result<T,G>) -> ResultEquipped<T,G> {
        match self.result {
            Ok(value) => ResultEquipped::new_ok(value),
            Err(_)    => ResultEquipped::new(other),
        }
    }

    /// Recovers from an error with a fallible computation. An `Ok` is passed through and `f` is
    /// not called.
    pub fn or_else<G,F>(self, f:F) -> ResultEquipped<T,G> where F : FnOnce(E) -> Result<T,G> {
        match self.result {
            Ok(value)  => ResultEquipped::new_ok(value),
            Err(error) => ResultEquipped::new(f(error)),
        }
    }
}


// === Extraction ===

impl<T,E> ResultEquipped<T,E> {
    /// Returns the success payload.
    ///
    /// # Panics
    /// Panics if this is `Err`, with a message embedding the debug rendering of the error.
    #[track_caller]
    pub fn unwrap(self) -> T where E : Debug {
        match self.result {
            Ok(value)  => value,
            Err(error) => {
                let context = "called `ResultEquipped::unwrap()` on an `Err` value";
                Abort::with_payload(context,&error).raise()
            }
        }
    }

    /// Returns the error payload.
    ///
    /// # Panics
    /// Panics if this is `Ok`, with a message embedding the debug rendering of the value.
    #[track_caller]
    pub fn unwrap_err(self) -> E where T : Debug {
        match self.result {
            Ok(value)  => {
                let context = "called `ResultEquipped::unwrap_err()` on an `Ok` value";
                Abort::with_payload(context,&value).raise()
            }
            Err(error) => error,
        }
    }

    pub fn unwrap_or(self, default:T) -> T {
        match self.result {
            Ok(value) => value,
            Err(_)    => default,
        }
    }

    pub fn unwrap_or_else<F>(self, f:F) -> T where F : FnOnce() -> T {
        match self.result {
            Ok(value) => value,
            Err(_)    => f(),
        }
    }

    pub fn unwrap_or_default(self) -> T where T : Default {
        self.unwrap_or_else(default)
    }

    /// Like `unwrap`, but the panic message starts with `msg`.
    #[track_caller]
    pub fn expect(self, msg:&str) -> T where E : Debug {
        match self.result {
            Ok(value)  => value,
            Err(error) => Abort::with_payload(msg,&error).raise(),
        }
    }

    /// Like `unwrap_err`, but the panic message starts with `msg`.
    #[track_caller]
    pub fn expect_err(self, msg:&str) -> E where T : Debug {
        match self.result {
            Ok(value)  => Abort::with_payload(msg,&value).raise(),
            Err(error) => error,
        }
    }
}


// === Structural Composition ===

impl<T,E> ResultEquipped<Option<T>,E> {
    /// Swaps the result and option layers. `Ok(None)` becomes absence, while an error stays
    /// present, as it carries information of its own.
    pub fn transpose(self) -> OptionEquipped<ResultEquipped<T,E>> {
        match self.result {
            Ok(None)        => OptionEquipped::none(),
            Ok(Some(value)) => OptionEquipped::some(ResultEquipped::new_ok(value)),
            Err(error)      => OptionEquipped::some(ResultEquipped::new_err(error)),
        }
    }
}

impl<T,E> ResultEquipped<OptionEquipped<T>,E> {
    /// Swaps the result and option layers, see the `Option` variant of this method.
    pub fn transpose(self) -> OptionEquipped<ResultEquipped<T,E>> {
        self.map(OptionEquipped::into_option).transpose()
    }
}

impl<X,E> ResultEquipped<X,E> where X : ResultShaped<E> {
    /// Removes one level of result nesting. `Ok(Ok(v))` becomes `Ok(v)` and `Ok(Err(e))` becomes
    /// `Err(e)`. An outer `Err` and a success payload which is not a result are left as they are.
    pub fn flatten(self) -> ResultEquipped<X::Value,E> {
        match self.result {
            Ok(nested) => ResultEquipped::new(nested.into_nested()),
            Err(error) => ResultEquipped::new_err(error),
        }
    }
}

impl<T,E> From<ResultEquipped<T,E>> for Result<T,E> {
    fn from(t:ResultEquipped<T,E>) -> Self {
        t.result
    }
}



// ====================
// === ResultShaped ===
// ====================

/// A success payload seen as one level of `Result<_,E>`. Nested results expose their inner layer,
/// every other payload is a plain success of itself.
pub trait ResultShaped<E> : Sized {
    type Value;
    fn into_nested(self) -> Result<Self::Value,E>;
}

impl<T,E> ResultShaped<E> for Result<T,E> {
    type Value = T;
    fn into_nested(self) -> Result<T,E> {
        self
    }
}

impl<T,E> ResultShaped<E> for ResultEquipped<T,E> {
    type Value = T;
    fn into_nested(self) -> Result<T,E> {
        self.result
    }
}

/// Marks types as plain success payloads, which `flatten` leaves untouched. Types defined outside
/// of this crate opt in with a single line, e.g. `equipped::impl_plain_result_shape!(Point);`, or
/// `equipped::impl_plain_result_shape!([T] Wrapper<T>);` for generic ones.
#[macro_export]
macro_rules! impl_plain_result_shape {
    ([$($bounds:tt)*] $($toks:tt)*) => {
        impl <$($bounds)*,__E> $crate::ResultShaped<__E> for $($toks)* {
            type Value = Self;
            fn into_nested(self) -> ::std::result::Result<Self,__E> {
                ::std::result::Result::Ok(self)
            }
        }
    };

    ($($toks:tt)*) => {
        impl<__E> $crate::ResultShaped<__E> for $($toks)* {
            type Value = Self;
            fn into_nested(self) -> ::std::result::Result<Self,__E> {
                ::std::result::Result::Ok(self)
            }
        }
    };
}


// === Primitives ===

impl_plain_result_shape!(());
impl_plain_result_shape!(bool);
impl_plain_result_shape!(char);
impl_plain_result_shape!(f32);
impl_plain_result_shape!(f64);
impl_plain_result_shape!(i8);
impl_plain_result_shape!(i16);
impl_plain_result_shape!(i32);
impl_plain_result_shape!(i64);
impl_plain_result_shape!(i128);
impl_plain_result_shape!(isize);
impl_plain_result_shape!(u8);
impl_plain_result_shape!(u16);
impl_plain_result_shape!(u32);
impl_plain_result_shape!(u64);
impl_plain_result_shape!(u128);
impl_plain_result_shape!(usize);
impl_plain_result_shape!(String);


// === References & Pointers ===

impl_plain_result_shape!(['a,T:?Sized] &'a T);
impl_plain_result_shape!(['a,T:?Sized] &'a mut T);
impl_plain_result_shape!([T:?Sized] Box<T>);
impl_plain_result_shape!([T:?Sized] Rc<T>);
impl_plain_result_shape!([T:?Sized] std::sync::Arc<T>);


// === Collections ===

impl_plain_result_shape!([T] Vec<T>);
impl_plain_result_shape!([T] std::collections::VecDeque<T>);
impl_plain_result_shape!([T,S] std::collections::HashSet<T,S>);
impl_plain_result_shape!([T] std::collections::BTreeSet<T>);
impl_plain_result_shape!([K,V,S] std::collections::HashMap<K,V,S>);
impl_plain_result_shape!([K,V] std::collections::BTreeMap<K,V>);

impl<T,E,const N:usize> ResultShaped<E> for [T;N] {
    type Value = Self;
    fn into_nested(self) -> Result<Self,E> {
        Ok(self)
    }
}


// === Tuples ===

impl_plain_result_shape!([A] (A,));
impl_plain_result_shape!([A,B] (A,B));
impl_plain_result_shape!([A,B,C] (A,B,C));
impl_plain_result_shape!([A,B,C,D] (A,B,C,D));
impl_plain_result_shape!([A,B,C,D,F] (A,B,C,D,F));
impl_plain_result_shape!([A,B,C,D,F,G] (A,B,C,D,F,G));
impl_plain_result_shape!([A,B,C,D,F,G,H] (A,B,C,D,F,G,H));
impl_plain_result_shape!([A,B,C,D,F,G,H,I] (A,B,C,D,F,G,H,I));
impl_plain_result_shape!([A,B,C,D,F,G,H,I,J] (A,B,C,D,F,G,H,I,J));
impl_plain_result_shape!([A,B,C,D,F,G,H,I,J,K] (A,B,C,D,F,G,H,I,J,K));
impl_plain_result_shape!([A,B,C,D,F,G,H,I,J,K,L] (A,B,C,D,F,G,H,I,J,K,L));
impl_plain_result_shape!([A,B,C,D,F,G,H,I,J,K,L,M] (A,B,C,D,F,G,H,I,J,K,L,M));


// === Crate Types ===

impl_plain_result_shape!(ResultKind);
impl_plain_result_shape!(crate::option::OptionKind);
impl_plain_result_shape!([T,U] Data<T,U>);
impl_plain_result_shape!([T] OptionEquipped<T>);



// =============
// === Tests ===
// =============

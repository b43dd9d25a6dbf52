//! A small augmented standard library shared by the equipped crates. Import it with
//! `use equipped_prelude::*;` to get the common derives, std reexports and the extension traits
//! defined in the submodules.

#![warn(unsafe_code)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

pub mod option;
pub mod result;

pub use option::OptionOps;
pub use result::ResultOps;

pub use boolinator::Boolinator;
pub use core::any::type_name;
pub use core::fmt::Debug;
pub use derivative::Derivative;
pub use derive_more::*;
pub use failure::Fail;
pub use shrinkwraprs::Shrinkwrap;
pub use std::cell::Cell;
pub use std::cell::RefCell;
pub use std::fmt::Display;
pub use std::iter;
pub use std::marker::PhantomData;
pub use std::ops::Deref;
pub use std::rc::Rc;



// ===========
// === Str ===
// ===========

/// Anything that can be viewed as a `&str` and turned into an owned `String`.
pub trait Str : Into<String> + AsRef<str> {}
impl<T> Str for T where T : Into<String> + AsRef<str> {}



// ===============
// === default ===
// ===============

/// Shorter alias for `Default::default()`.
pub fn default<T:Default>() -> T {
    Default::default()
}

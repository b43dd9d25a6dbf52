//! Result and Option wrappers with a fluent operation surface. `ResultEquipped` holds either a
//! success value or an error value, `OptionEquipped` holds either a value or nothing. Both are
//! immutable: every transformation consumes the wrapper and returns a new one, and terminal
//! extraction either yields the payload or aborts the current computation with a panic.

#![warn(unsafe_code)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

// Lints. To be refactored after this gets resolved: https://github.com/rust-lang/cargo/issues/5034
#![allow(clippy::should_implement_trait)]
#![allow(clippy::wrong_self_convention)]



// =================================
// === Module Structure Reexport ===
// =================================

pub mod abort;
pub mod data;
pub mod option;
pub mod result;

pub use abort::Abort;
pub use data::Data;
pub use option::OptionEquipped;
pub use option::OptionKind;
pub use result::ResultEquipped;
pub use result::ResultKind;
pub use result::ResultShaped;

pub use equipped_prelude as prelude;



// ==============
// === Logger ===
// ==============

/// Logger used for the abort diagnostics. Selected by the `logging` cargo feature.
#[cfg(feature = "logging")]
pub type Logger = equipped_logger::enabled::Logger;

/// Logger used for the abort diagnostics. Selected by the `logging` cargo feature.
#[cfg(not(feature = "logging"))]
pub type Logger = equipped_logger::disabled::Logger;

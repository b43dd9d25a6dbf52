//! Unrecoverable halting of the current computation. Used only when a wrapper is asked for a
//! payload it does not hold, which is a bug in the calling code rather than a modeled failure.
//! The abort is always a panic, so it can never be mistaken for an `Err` value.

use crate::prelude::*;

use crate::Logger;
use equipped_logger::LoggerApi;
use equipped_logger::error;



// =============
// === Abort ===
// =============

/// Path of the logger reporting aborts.
pub const LOGGER_PATH : &str = "equipped";

/// Description of a contract violation, raised with `Abort::raise`.
#[derive(Clone,Debug,Fail,PartialEq,Eq)]
#[fail(display = "{}", message)]
pub struct Abort {
    message : String,
}

impl Abort {
    /// Abort with a plain message.
    pub fn new<M:Str>(message:M) -> Self {
        let message = message.into();
        Self {message}
    }

    /// Abort with a contextual message followed by the debug rendering of the unexpected
    /// payload, e.g. `called unwrap on an Err value: "file not found"`.
    pub fn with_payload<M,P>(context:M, payload:&P) -> Self
    where M:AsRef<str>, P:Debug+?Sized {
        let message = format!("{}: {:?}", context.as_ref(), payload);
        Self {message}
    }

    /// The full message the abort panics with.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Reports the abort to the logger selected by the `logging` feature and halts the current
    /// computation.
    #[track_caller]
    pub fn raise(self) -> ! {
        self.raise_with(&Logger::new(LOGGER_PATH))
    }

    /// Reports the abort to the given logger and halts the current computation. The panic message
    /// does not depend on the logger.
    #[track_caller]
    pub fn raise_with<L:LoggerApi>(self, logger:&L) -> ! {
        error!(logger, "{}", self);
        panic!("{}", self.message)
    }
}

/// Halts the current computation with the given message.
#[track_caller]
pub fn panic<M:Str>(message:M) -> ! {
    Abort::new(message).raise()
}

/// Marks a code path that has not been written yet.
#[track_caller]
pub fn todo() -> ! {
    panic("not yet implemented")
}



// =============
// === Tests ===
// =============

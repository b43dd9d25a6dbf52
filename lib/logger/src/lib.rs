//! Minimal logger used for diagnostics. Every logger carries a path identifying the component it
//! belongs to. Messages are passed either as strings or as closures producing them, so the
//! formatting cost is only paid by loggers that actually print.

#![warn(unsafe_code)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

pub mod disabled;
pub mod enabled;

use equipped_prelude::*;



// ==============
// === LogMsg ===
// ==============

/// A message that can be lazily rendered to `&str`.
pub trait LogMsg {
    fn with_log_msg<F: FnOnce(&str) -> T, T>(&self, f:F) -> T;
}

impl LogMsg for &str {
    fn with_log_msg<F: FnOnce(&str) -> T, T>(&self, f:F) -> T {
        f(self)
    }
}

impl LogMsg for String {
    fn with_log_msg<F: FnOnce(&str) -> T, T>(&self, f:F) -> T {
        f(self.as_str())
    }
}

impl<F: Fn() -> S, S:Str> LogMsg for F {
    fn with_log_msg<G: FnOnce(&str) -> T, T>(&self, f:G) -> T {
        f(self().as_ref())
    }
}



// ==============
// === Logger ===
// ==============

pub trait LoggerApi {
    /// Creates a new logger. Path should be a unique identifier of the reporting component.
    fn new<T:Str>(path:T) -> Self;
    /// Log with level:error.
    fn error<M:LogMsg>(&self, msg:M);
}



// ==============
// === Macros ===
// ==============

#[macro_export]
macro_rules! log_template {
    ($method:ident $logger:expr, $($args:tt)*) => {{
        $logger.$method(|| format!($($args)*));
    }};
}

#[macro_export]
macro_rules! error {
    ($($toks:tt)*) => {
        $crate::log_template! {error $($toks)*}
    };
}



// =============
// === Tests ===
// =============

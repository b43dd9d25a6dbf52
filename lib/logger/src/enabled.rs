//! Logger reporting path-prefixed messages on the standard error stream.

use crate::*;
use equipped_prelude::Str;



// ==============
// === Logger ===
// ==============

/// Logger that prints every message, tagged with its level and path.
#[derive(Clone,Debug,Default)]
pub struct Logger {
    path : String,
}

impl Logger {
    /// Identifier of the reporting component.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn format<M:LogMsg>(&self, level:&str, msg:M) -> String {
        msg.with_log_msg(|s| format!("[{}] [{}] {}", level, self.path, s))
    }
}

impl LoggerApi for Logger {
    fn new<T:Str>(path:T) -> Self {
        let path = path.into();
        Self {path}
    }

    fn error<M:LogMsg>(&self, msg:M) {
        eprintln!("{}",self.format("ERROR",msg));
    }
}



// =============
// === Tests ===
// =============

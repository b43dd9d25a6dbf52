//! Logger used when diagnostics are switched off.

use crate::*;
use equipped_prelude::Str;



/// Logger dropping every message without rendering it.
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq)]
pub struct Logger;

impl LoggerApi for Logger {
    fn new<T:Str>(_path:T) -> Self {
        Self
    }

    fn error<M:LogMsg>(&self, _msg:M) {}
}

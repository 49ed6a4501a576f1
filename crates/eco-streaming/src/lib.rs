//! Streaming primitives for shell-first SSR.
//!
//! - `StreamingSink` - Shell-first streaming over any `futures::Sink`
//! - `Shell` - Document shell around the streamed sections

mod shell;
mod sink;

pub use shell::*;
pub use sink::*;

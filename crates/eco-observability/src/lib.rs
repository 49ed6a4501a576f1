//! Observability for marketplace workloads.
//!
//! - `StructuredLogger` - Structured logging with request context
//! - `LogBuilder` - Fluent structured fields

mod logging;

pub use logging::*;

pub use eco_core::{RequestId, TimingContext};

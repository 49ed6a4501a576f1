//! Core abstractions for the sustainable marketplace workloads.
//!
//! This crate provides the fundamental types shared by every page:
//! - `WorkloadManifest` - Workload configuration
//! - `RequestContext` - Typed request parameters
//! - `FormData` - Decoded query strings and urlencoded bodies
//! - `LifecyclePhase` - Request lifecycle tracking

mod config;
mod context;
mod form;
mod lifecycle;
mod workload;

pub use config::*;
pub use context::*;
pub use form::*;
pub use lifecycle::*;
pub use workload::*;

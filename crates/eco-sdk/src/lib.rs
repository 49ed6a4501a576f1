//! Public SDK for sustainable marketplace workloads.
//!
//! This crate re-exports the platform and domain crates:
//!
//! ```ignore
//! use eco_sdk::prelude::*;
//!
//! async fn render<S, E>(ctx: &RequestContext, sink: &mut StreamingSink<S, E>) -> Result<(), WorkloadError>
//! where
//!     S: futures::Sink<Vec<u8>, Error = E> + Unpin,
//!     E: std::fmt::Display,
//! {
//!     let logger = StructuredLogger::new(ctx.request_id.clone()).with_workload("my-page");
//!     let shell = Shell::new(HeadContent::new("Eco Market"));
//!     sink.send_shell(&shell.render_opening()).await?;
//!
//!     let catalog = Catalog::from_default_fixture(DecorationMode::Stable, 42)
//!         .map_err(|e| WorkloadError::Other(e.into()))?;
//!     let view = catalog.browse(&BrowseQuery::default());
//!     logger.info_builder("derived").field_i64("products", view.len() as i64).emit();
//!
//!     sink.send_section("grid", &render_grid(&view)).await?;
//!     sink.finish(&shell.render_closing()).await
//! }
//! ```

pub use eco_commerce;
pub use eco_core;
pub use eco_observability;
pub use eco_streaming;

/// Prelude for convenient imports.
pub mod prelude {
    pub use eco_commerce::prelude::*;
    pub use eco_core::*;
    pub use eco_observability::*;
    pub use eco_streaming::*;
}

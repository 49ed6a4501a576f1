//! Section renderers for the catalog page.

mod filters;
mod grid;
mod header;
mod impact;

pub use filters::*;
pub use grid::*;
pub use header::*;
pub use impact::*;

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

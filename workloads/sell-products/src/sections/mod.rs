//! Section renderers for the seller page.

mod form;
mod gallery;
mod header;
mod stats;
mod tips;

pub use form::*;
pub use gallery::*;
pub use header::*;
pub use stats::*;
pub use tips::*;

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

//! Request middleware.
//!
//! Purpose: request lifecycle concerns that apply to every route, currently
//! trace identifiers and per-request log spans.

pub mod trace;

pub use trace::Trace;

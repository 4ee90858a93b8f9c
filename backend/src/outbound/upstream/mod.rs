//! Upstream employee service adapter.
//!
//! This module provides the reqwest implementation of the
//! `EmployeeUpstream` port.

mod dto;
mod http_client;

pub use http_client::HttpEmployeeUpstream;

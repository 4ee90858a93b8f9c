//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **upstream**: reqwest client for the upstream employee REST service
//!
//! Adapters are thin translators between domain types and the wire format.
//! They contain no business logic.

pub mod upstream;

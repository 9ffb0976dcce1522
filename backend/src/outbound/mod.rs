//! Outbound adapters implementing domain ports.
//!
//! Adapters translate between domain types and infrastructure
//! representations. They hold no business logic.

pub mod persistence;

//! # Bloglist Core
//!
//! The domain layer of the bloglist backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! entities, ports, ownership policy and the list aggregation helpers.

pub mod domain;
pub mod error;
pub mod list_helper;
pub mod policy;
pub mod ports;

pub use error::DomainError;

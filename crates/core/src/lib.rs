//! Domain types and pure logic for the book catalog.
//!
//! Nothing in this crate touches the database or the network, so the
//! repository layer and the HTTP adapter can both depend on it.

pub mod error;
pub mod search;
pub mod types;
pub mod validation;

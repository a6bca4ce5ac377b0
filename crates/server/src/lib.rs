//! Labelpress print service library.
//!
//! The HTTP routes live here so integration tests can mount the router
//! in-process; the `labelpressd` binary wires configuration, logging,
//! and serving around them.

#![warn(missing_docs)]

/// HTTP routes and shared service state.
pub mod routes;

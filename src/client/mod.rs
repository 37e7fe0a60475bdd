//! Client side of the registry.
//!
//! - `api` - `FacultyClient`, a reqwest client for every endpoint
//! - `form` - checks a front end runs before submitting, against the lists it already holds
//! - `filter` - search and per-reference counts over loaded lists
//!
//! Nothing here is authoritative. The server re-validates every write.

pub mod api;
pub mod filter;
pub mod form;
pub mod model;

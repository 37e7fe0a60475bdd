//! Faculty registry: degrees, departments and teachers of a university faculty.
//!
//! `model` holds the wire types and field rules shared by both sides. The `server` feature
//! adds the axum + SeaORM backend, the `client` feature a reqwest API client with the
//! form checks and list filters a front end runs before and after talking to it.

pub mod model;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "server")]
pub mod server;

//! Wire models shared by the server and the client.
//!
//! DTOs here are what travels over HTTP as JSON (camelCase field names). The server converts
//! them into its own parameter models before touching storage; the client sends and receives
//! them directly. `validation` holds the single field rule set both sides run.

pub mod api;
pub mod date;
pub mod degree;
pub mod department;
pub mod statistics;
pub mod teacher;
pub mod validation;

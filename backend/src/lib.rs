//! Holocron: a small REST service over users, planets, people and their
//! favourites.
//!
//! Layers follow a hexagonal split: [`domain`] holds records and store ports,
//! [`outbound`] implements the ports (in memory or PostgreSQL), and
//! [`inbound`] exposes them over HTTP.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and the route listing.
pub use doc::ApiDoc;
pub use middleware::Trace;

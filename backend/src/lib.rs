//! Dog-breed catalogue and favourites backend.
//!
//! The crate follows a hexagonal layout: `domain` holds transport-agnostic
//! types, services, and storage ports; `inbound` adapts HTTP requests onto
//! the domain; `outbound` implements the storage ports against flat JSON
//! files. The binary wires the layers together in its `server` module.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by documentation tooling.
pub use doc::ApiDoc;
/// Tracing middleware attaching a request-scoped trace identifier.
pub use middleware::trace::Trace;

//! Remote data access over the fleet GraphQL API.
//!
//! The API is treated as an opaque collaborator: this module sends an
//! operation text plus named variables and hands back the `data` payload,
//! or fails with a [`RemoteError`] built from the envelope's first error
//! message (structured failures) or from the transport (network failures).
//!
//! Every call toggles a [`BusyGauge`] the view layer can poll for its
//! loading indicator. Calls are single-attempt: no retries, no timeout.

pub mod envelope;
pub mod gauge;

#[cfg(feature = "remote-repo")]
pub mod client;

pub use envelope::{unwrap_envelope, RemoteError};
pub use gauge::{BusyGauge, BusyGuard};

#[cfg(feature = "remote-repo")]
pub use client::GraphqlClient;

//! Repository implementations.

#[cfg(feature = "local-repo")]
pub mod local;

#[cfg(feature = "remote-repo")]
pub mod remote;

#[cfg(feature = "local-repo")]
pub use local::LocalRepository;

#[cfg(feature = "remote-repo")]
pub use remote::RemoteRepository;

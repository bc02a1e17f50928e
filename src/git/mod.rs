//! Git resource proxy.
//!
//! [`GitService`] maps the Git endpoints used by this crate onto typed
//! calls. It borrows the [`Client`](crate::client::Client), so obtaining one
//! through [`Client::git`](crate::client::Client::git) is free.

mod service;

#[cfg(test)]
mod service_tests;

pub use service::GitService;

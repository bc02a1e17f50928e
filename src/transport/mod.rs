//! Transport layer for talking to the Azure DevOps service.
//!
//! This module provides:
//! - HTTP request values ([`HttpRequest`])
//! - Buffered HTTP responses ([`HttpResponse`])
//! - The transport abstraction ([`HttpClient`])
//! - The production transport ([`ReqwestClient`])

mod client;
mod error;
mod http;

#[cfg(test)]
mod http_tests;
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse};

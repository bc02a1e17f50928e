//! azdo: Azure DevOps REST client
//!
//! A library for calling the Azure DevOps REST API with typed requests and
//! responses, and for decoding service hook (webhook) deliveries into typed
//! events.

pub mod client;
pub mod config;
pub mod git;
pub mod models;
pub mod transport;
pub mod webhook;

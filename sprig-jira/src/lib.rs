//! # Jira API Client
//!
//! A thin Jira REST client: each operation validates its parameters against a
//! declared schema, issues exactly one request, and returns the raw response.

pub mod auth;
mod client;
pub mod consts;
pub mod dispatcher;
pub mod endpoints;
pub mod error;
pub mod params;
pub mod request;
pub mod transport;

#[cfg(test)]
mod testing;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
pub use endpoints::{ENDPOINTS, Endpoint, endpoint};
pub use error::{JiraError, Result};
pub use params::{ParamType, Params, Schema};
pub use request::{ParamLocation, RawResponse, RequestDescriptor};
pub use transport::{ClientOptions, HttpTransport, JiraAuth, Transport};

//! HTTP inbound adapter exposing the admin REST endpoints.

pub mod admin;
pub mod cache_control;
pub mod error;
pub mod health;
pub mod routes;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

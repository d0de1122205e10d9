//! Ipinfod - a public IP geolocation lookup service
//!
//! This library provides the core functionality for the Ipinfod service: an
//! HTTP API that resolves a caller's public IP address, queries an external
//! geolocation provider for it, and returns the reshaped result.
//!
//! # Architecture
//! - `config`: environment-based configuration loaded once at startup
//! - `errors`: service error types and HTTP status mapping
//! - `services`: HTTP handlers and the upstream provider abstraction
//! - `system`: logging bootstrap
//! - `utils`: client-IP resolution helpers

pub mod config;
pub mod errors;
pub mod services;
pub mod system;
pub mod utils;

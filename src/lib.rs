//! ipscope - IPv4 geolocation report service
//!
//! Accepts an IPv4 address (query parameter, forwarding headers or a default),
//! validates it, queries an external geolocation service and returns a
//! ten-section JSON report enriched by local classification tables.
//!
//! # Architecture
//! - `api`: HTTP handlers, middleware and response constants
//! - `classify`: Pure classification functions and static lookup tables
//! - `services`: Upstream geolocation client and report composition
//! - `config`: Configuration management
//! - `runtime`: Server startup
//! - `system`: Logging initialization
//! - `utils`: Address resolution and validation

pub mod api;
pub mod classify;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod system;
pub mod utils;

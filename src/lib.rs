//! wordpress-mcp: MCP server exposing the WordPress REST API as tools
//!
//! This library translates typed tool invocations into authenticated REST
//! requests against a WordPress site and slims the verbose responses into
//! compact JSON payloads.
//!
//! # Architecture
//!
//! - **Transport**: authenticated JSON requests against `<site>/wp-json`
//! - **Projection**: pure per-entity field selection, tag stripping and truncation
//! - **Tool catalog**: one schema-validated handler per tool
//! - **MCP server**: JSON-RPC 2.0 over stdio
//!
//! # Modules
//!
//! - [`config`] — Configuration loading and validation
//! - [`error`] — Configuration error types
//! - [`mcp`] — MCP protocol implementation
//! - [`projection`] — Response slimming
//! - [`tools`] — Tool definitions and handlers
//! - [`wordpress`] — REST API client

pub mod config;
pub mod error;
pub mod mcp;
pub mod projection;
pub mod tools;
pub mod wordpress;

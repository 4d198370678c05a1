//! Domains module containing business logic organized by bounded contexts.
//!
//! - `webmaster`: the Yandex Webmaster API client (request building, retries,
//!   timeouts, response parsing)
//! - `tools`: the MCP tools exposed to clients, one per API operation

pub mod tools;
pub mod webmaster;

//! Tools domain module.
//!
//! Each tool wraps one Yandex Webmaster API operation. Tools are executable
//! functions MCP clients call by name with a JSON arguments object.
//!
//! ## Architecture
//!
//! - `definitions/` - Static tool tables, one file per API area
//! - `spec.rs` - The `ToolSpec` descriptor and the shared call path
//! - `schema.rs` - Parameter tables, input schemas and argument validation
//! - `boundary.rs` - Error boundary turning failures into error results
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add the endpoint method to `WebmasterClient`
//! 2. Add a `ToolSpec` entry and its handler to the matching `definitions/` file
//!
//! The router and registry pick up the new entry from `definitions::all_tools`.

pub mod boundary;
pub mod definitions;
mod error;
mod registry;
pub mod router;
pub mod schema;
pub mod spec;

pub use error::{ToolError, ToolResult};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
pub use spec::ToolSpec;

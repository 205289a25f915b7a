//! animgate - MCP gateway for Unity editor animation tooling
//!
//! This library exposes one tool, `manage_animation`, over the MCP
//! JSON-RPC surface and forwards it to a remote Unity editor through an
//! injected [`animproto::EditorConnection`]. It provides:
//!
//! - `tool`: the dispatch boundary (build request, forward, normalize,
//!   never raise past the public surface)
//! - `tools`: tool registry entries with schemars-derived input schemas
//! - `mcp`: MCP JSON-RPC handling (initialize, tools/list, tools/call, ping)
//! - `serve`: axum server surface with health endpoint and graceful shutdown
//!
//! There is no binary and no CLI: embedders construct a connection, build
//! the router, and serve it.

pub mod mcp;
pub mod serve;
pub mod tool;
pub mod tools;

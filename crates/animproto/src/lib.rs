//! animproto - Protocol types for the Unity editor animation bridge
//!
//! This crate defines the request/response contract between an MCP-facing
//! gateway and a remote Unity editor process. The editor owns all animation
//! semantics; this crate only normalizes what crosses the boundary:
//!
//! - `ManageAnimationParams` - a mostly-optional parameter set that
//!   serializes sparsely (absent fields are omitted, never null), so the
//!   editor can apply its own defaults unambiguously
//! - `ActionResult` - the canonical two-variant outcome every call
//!   collapses into, regardless of what the editor sent back
//! - `EditorConnection` - the async seam to whatever transport owns the
//!   editor process; this crate deliberately ships no implementation
//!
//! The `animgate` crate exposes these types over MCP.

pub mod action;
pub mod connection;
pub mod params;
pub mod result;

pub use action::AnimationAction;
pub use connection::{ConnectionError, EditorConnection, MANAGE_ANIMATION};
pub use params::{CurveData, Keyframe, ManageAnimationParams};
pub use result::ActionResult;

//! Action discriminator for animation commands.
//!
//! The editor dispatches on a string; the known operations get enum
//! variants so gateway code can match on them, and anything the editor
//! grows later passes through `Other` without a protocol change.

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Which remote animation operation to perform.
///
/// Serializes as the raw snake_case string the editor expects
/// (`"create_clip"`, `"add_animator"`, ...). Unknown strings
/// round-trip through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationAction {
    CreateClip,
    CreateIdleAnimation,
    CreateWalkAnimation,
    AddAnimator,
    CreateAnimatorController,
    #[serde(untagged)]
    Other(String),
}

impl AnimationAction {
    /// The wire name of this action.
    pub fn as_str(&self) -> &str {
        match self {
            Self::CreateClip => "create_clip",
            Self::CreateIdleAnimation => "create_idle_animation",
            Self::CreateWalkAnimation => "create_walk_animation",
            Self::AddAnimator => "add_animator",
            Self::CreateAnimatorController => "create_animator_controller",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for AnimationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for AnimationAction {
    fn from(name: &str) -> Self {
        match name {
            "create_clip" => Self::CreateClip,
            "create_idle_animation" => Self::CreateIdleAnimation,
            "create_walk_animation" => Self::CreateWalkAnimation,
            "add_animator" => Self::AddAnimator,
            "create_animator_controller" => Self::CreateAnimatorController,
            other => Self::Other(other.to_string()),
        }
    }
}

// On the wire an action is a plain string, so the published schema
// says exactly that rather than exposing the enum's internals.
impl JsonSchema for AnimationAction {
    fn schema_name() -> Cow<'static, str> {
        "AnimationAction".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        schemars::json_schema!({
            "type": "string",
            "description": "Operation type: 'create_clip', 'create_idle_animation', 'create_walk_animation', 'add_animator', or 'create_animator_controller'",
        })
    }
}

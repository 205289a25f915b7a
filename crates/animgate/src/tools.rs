//! Tool registry for the MCP surface.
//!
//! Schemas are derived from the animproto parameter types so tools/list
//! always matches what tools/call actually deserializes.

use animproto::ManageAnimationParams;
use serde::Serialize;
use serde_json::Value;

/// One tool as advertised over MCP.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// The manage_animation tool entry.
pub fn manage_animation_tool() -> ToolInfo {
    let schema = schemars::schema_for!(ManageAnimationParams);
    ToolInfo {
        name: "manage_animation".to_string(),
        description: "Manage Unity animations: create AnimationClips (including custom keyframe \
                      curves), generate preset idle/walk animations, add Animator components to \
                      GameObjects, and create AnimatorController assets."
            .to_string(),
        input_schema: serde_json::to_value(schema)
            .unwrap_or_else(|_| serde_json::json!({ "type": "object" })),
    }
}

/// All tools this gateway serves.
pub fn all_tools() -> Vec<ToolInfo> {
    vec![manage_animation_tool()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manage_animation_schema_is_an_object_schema() {
        let tool = manage_animation_tool();
        assert_eq!(tool.name, "manage_animation");
        assert_eq!(tool.input_schema["type"], "object");

        let props = tool.input_schema["properties"]
            .as_object()
            .expect("schema has properties");
        for field in [
            "action",
            "name",
            "path",
            "target",
            "frameRate",
            "duration",
            "loop",
            "speed",
            "amplitude",
            "stepHeight",
            "swayAmount",
            "controllerPath",
            "clips",
            "curves",
        ] {
            assert!(props.contains_key(field), "schema missing {field}");
        }
    }

    #[test]
    fn only_action_is_required() {
        let tool = manage_animation_tool();
        let required: Vec<&str> = tool.input_schema["required"]
            .as_array()
            .map(|a| a.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(required, vec!["action"]);
    }
}

//! Tool parameter types with JSON Schema derivation.
//!
//! `ManageAnimationParams` is the gateway's request-normalization layer:
//! every optional field carries `skip_serializing_if`, so the payload the
//! editor sees contains the mandatory `action` plus exactly the fields the
//! caller supplied. The presence test is "was a value supplied", never
//! truthiness - an explicit `loop: false` or `duration: 0` goes over the
//! wire verbatim, while an absent field is omitted entirely (no null
//! placeholders), leaving editor-side defaults unambiguous.
//!
//! No validation happens here. An action that semantically needs a field
//! the caller didn't supply is forwarded as-is; rejection authority lives
//! in the editor.

use crate::action::AnimationAction;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the manage_animation tool.
///
/// Field names match the editor's camelCase wire convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManageAnimationParams {
    /// Operation to perform on the editor side
    pub action: AnimationAction,
    /// Name of the animation clip or controller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Asset path for saving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Target GameObject name for adding an Animator component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Frame rate for the animation clip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<f64>,
    /// Duration of the animation in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Whether the animation should loop
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#loop: Option<bool>,
    /// Speed multiplier for preset animations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Amplitude of the idle animation breathing effect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<f64>,
    /// Step height for walk animations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_height: Option<f64>,
    /// Body sway amount for walk animations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sway_amount: Option<f64>,
    /// Path to the AnimatorController asset to assign
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_path: Option<String>,
    /// AnimationClip paths for controller creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clips: Option<Vec<String>>,
    /// Custom curve data for the create_clip action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curves: Option<Vec<CurveData>>,
}

impl ManageAnimationParams {
    /// Start a parameter set with everything optional left unset.
    pub fn new(action: AnimationAction) -> Self {
        Self {
            action,
            name: None,
            path: None,
            target: None,
            frame_rate: None,
            duration: None,
            r#loop: None,
            speed: None,
            amplitude: None,
            step_height: None,
            sway_amount: None,
            controller_path: None,
            clips: None,
            curves: None,
        }
    }

    /// Build the sparse request payload sent to the editor.
    ///
    /// Pure and total over the parameter set: the result is a JSON object
    /// holding `action` plus every supplied field, nothing else.
    pub fn to_request(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// One animation curve targeting a property on a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurveData {
    /// Path of the target object relative to the animated root
    /// (empty string targets the root itself)
    #[serde(default)]
    pub target_path: String,
    /// Animated property, e.g. "localPosition.y"
    pub property: String,
    /// Component type the property lives on, e.g. "Transform"
    pub component_type: String,
    /// Keyframes in time order
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

/// A single time/value keyframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Keyframe {
    /// Time in seconds
    pub time: f64,
    /// Property value at that time
    pub value: f64,
}

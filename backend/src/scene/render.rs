//! Rendering-context probe and the fallback notice shown when it fails.

use serde::{Deserialize, Serialize};

/// What the host can render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderCapabilities {
    /// A 3D rendering context could be created
    pub supports_3d: bool,
    /// Host-provided reason when `supports_3d` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl RenderCapabilities {
    pub fn available() -> Self {
        Self {
            supports_3d: true,
            failure: None,
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            supports_3d: false,
            failure: Some(reason.into()),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("3D rendering unavailable: {reason}")]
    RenderingUnavailable { reason: String },
}

/// The single action the fallback offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackAction {
    Reload,
}

/// Full-screen notice replacing the scene when rendering cannot start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackNotice {
    pub title: String,
    pub message: String,
    pub action: FallbackAction,
}

impl From<&SceneError> for FallbackNotice {
    fn from(error: &SceneError) -> Self {
        match error {
            SceneError::RenderingUnavailable { reason } => Self {
                title: "Unable to Load 3D View".to_string(),
                message: format!(
                    "Your browser or device may not support 3D rendering ({}).",
                    reason
                ),
                action: FallbackAction::Reload,
            },
        }
    }
}

/// Fail unless the host can render 3D.
pub fn probe(capabilities: &RenderCapabilities) -> Result<(), SceneError> {
    if capabilities.supports_3d {
        return Ok(());
    }
    let reason = capabilities
        .failure
        .clone()
        .unwrap_or_else(|| "no 3D context".to_string());
    log::error!("Rendering context unavailable: {}", reason);
    Err(SceneError::RenderingUnavailable { reason })
}

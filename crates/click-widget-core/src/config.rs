// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mount configuration supplied by the host page.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Element id the host page reserves for the widget unless told otherwise.
pub const DEFAULT_MOUNT_ID: &str = "react_root";

/// Where to mount the widget.
///
/// Deserializes from host objects shaped like `{ "mountId": "..." }`; a
/// missing `mountId` falls back to [`DEFAULT_MOUNT_ID`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct WidgetConfig {
    /// Id of the host element that receives the button.
    pub mount_id: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_owned(),
        }
    }
}

impl WidgetConfig {
    /// Config targeting `mount_id`.
    pub fn new(mount_id: impl Into<String>) -> Self {
        Self {
            mount_id: mount_id.into(),
        }
    }

    /// Reject configs that cannot name an element.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mount_id.trim().is_empty() {
            return Err(ConfigError::EmptyMountId);
        }
        Ok(())
    }
}

//! # Image Picker
//!
//! The seam between the add-pet screen and the device camera / photo library.
//! Platform shells implement [`ImagePicker`]; tests use a canned fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Where the picked image comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    Camera,
    Gallery,
}

impl ImageSource {
    /// Alert text shown when the OS refuses access.
    pub const fn permission_message(&self) -> &'static str {
        match self {
            ImageSource::Camera => "Sorry, we need camera permissions to take photos.",
            ImageSource::Gallery => "Sorry, we need camera roll permissions to upload images.",
        }
    }
}

/// Image picking failures.
#[derive(Debug, Error)]
pub enum PickError {
    /// The user (or OS policy) refused access.
    #[error("{}", .0.permission_message())]
    PermissionDenied(ImageSource),

    /// The picker itself failed.
    #[error("Image picker failed: {0}")]
    Failed(String),
}

/// Device image picker.
#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// Asks for permission, then lets the user pick.
    ///
    /// `Ok(None)` means the user cancelled.
    async fn pick(&self, source: ImageSource) -> Result<Option<String>, PickError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_messages() {
        assert_eq!(
            PickError::PermissionDenied(ImageSource::Gallery).to_string(),
            "Sorry, we need camera roll permissions to upload images."
        );
        assert_eq!(
            PickError::PermissionDenied(ImageSource::Camera).to_string(),
            "Sorry, we need camera permissions to take photos."
        );
    }
}

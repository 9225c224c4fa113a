//! App (base) metadata types.

use serde::{Deserialize, Serialize};

/// Metadata of one bitable app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct App {
    /// Token identifying the app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_token: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Revision counter, bumped on every structural change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<i64>,
}

/// Payload of an app-metadata response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    /// The app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<App>,
}

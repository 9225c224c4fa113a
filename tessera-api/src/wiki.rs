//! Wiki node resolution types.
//!
//! A wiki document reference resolves to the object it wraps; only nodes
//! whose object type is [`OBJ_TYPE_BITABLE`] can be used as a table app.

use serde::{Deserialize, Serialize};

/// Object type of a node backed by a bitable app.
pub const OBJ_TYPE_BITABLE: &str = "bitable";

/// Object type sent when looking a node up by its wiki token.
pub const OBJ_TYPE_WIKI: &str = "wiki";

/// One wiki node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Type of the object the node wraps, e.g. `"bitable"` or `"doc"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj_type: Option<String>,
    /// Token of the wrapped object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj_token: Option<String>,
    /// Node title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Payload of a get-node response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    /// The resolved node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<Node>,
}

//! Stones

use serde::{Deserialize, Serialize};

/// A gemstone that can be attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stone {
    /// Stone id
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Stone name
    pub name: String,
}

impl Stone {
    /// Create a stone.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

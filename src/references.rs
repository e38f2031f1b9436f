//! Relational References
//!
//! The catalog API returns related records (categories, subcategories, stones) either as a bare
//! id or as an embedded object. [`Reference`] accepts both so callers never branch on the shape.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A reference to another catalog record.
///
/// Only strings decode as [`Reference::Id`] and only maps as [`Reference::Embedded`]. Lists,
/// numbers and maps with mistyped fields are kept as [`Reference::Malformed`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reference {
    /// A bare record id.
    Id(String),

    /// An embedded (populated) record.
    Embedded(EmbeddedReference),

    /// Any other shape; never resolves to an id.
    Malformed(Value),
}

impl<'de> Deserialize<'de> for Reference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl From<Value> for Reference {
    fn from(value: Value) -> Self {
        match value {
            Value::String(id) => Self::Id(id),
            Value::Object(_) => match EmbeddedReference::deserialize(&value) {
                Ok(embedded) => Self::Embedded(embedded),
                Err(_) => Self::Malformed(value),
            },
            _ => Self::Malformed(value),
        }
    }
}

/// The fields of an embedded record that references care about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedReference {
    /// Record id
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    /// Record display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Record slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Reference {
    /// Create a bare id reference.
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Create an embedded reference carrying an id and a display name.
    pub fn embedded(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Embedded(EmbeddedReference {
            id: Some(id.into()),
            name: Some(name.into()),
            slug: None,
        })
    }

    /// The referenced record id, if one can be determined.
    pub fn resolve(&self) -> Option<&str> {
        match self {
            Self::Id(id) => Some(id.as_str()),
            Self::Embedded(embedded) => embedded.id.as_deref(),
            Self::Malformed(_) => None,
        }
    }

    /// The embedded display name, if the reference was populated.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Embedded(embedded) => embedded.name.as_deref(),
            Self::Id(_) | Self::Malformed(_) => None,
        }
    }

    /// The embedded slug, if the reference was populated.
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Embedded(embedded) => embedded.slug.as_deref(),
            Self::Id(_) | Self::Malformed(_) => None,
        }
    }
}

/// Resolve an optional reference to its id.
///
/// An absent reference, an embedded object without an id and any malformed value all resolve to
/// `None`. Empty ids are treated as absent.
pub fn resolve_id(reference: Option<&Reference>) -> Option<&str> {
    reference
        .and_then(Reference::resolve)
        .filter(|id| !id.is_empty())
}

/// Deserialize a field where `null` means "use the default".
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

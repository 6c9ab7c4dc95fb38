use serde::{Deserialize, Serialize};

use crate::like::RefType;

/// Point query: selects the like whose identifier equals `id`.
///
/// An empty `id` is a legal query; it matches only a like whose own
/// identifier is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeQuery {
    #[serde(default)]
    pub id: String,
}

impl LikeQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Filter query: selects every like whose composite key equals `ref_type`.
///
/// `ref_type: None` is distinct from `Some(RefType::default())`: the former is
/// an underspecified request, the latter filters on an empty key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikesQuery {
    #[serde(default, alias = "ref_type", skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<RefType>,
}

impl LikesQuery {
    pub fn new(ref_type: RefType) -> Self {
        Self {
            ref_type: Some(ref_type),
        }
    }

    /// A query with no composite key.
    pub fn unfiltered() -> Self {
        Self { ref_type: None }
    }
}

impl From<RefType> for LikesQuery {
    fn from(ref_type: RefType) -> Self {
        Self::new(ref_type)
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Composite key grouping likes: the kind of thing liked and its identifier.
///
/// Two keys are equal only when both `name` and `id` are equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RefType {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
}

impl RefType {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for RefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.id)
    }
}

/// Parses the `NAME:ID` form produced by `Display`.
impl FromStr for RefType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((name, id)) if !name.is_empty() && !id.is_empty() => Ok(Self::new(name, id)),
            _ => Err(TypeError::InvalidRefType(s.to_string())),
        }
    }
}

/// A single recorded vote.
///
/// Likes are created in bulk when the record store is loaded and are never
/// modified afterwards. The JSON form uses `refType`; `ref_type` is accepted
/// on input as well.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "ref_type")]
    pub ref_type: RefType,
    #[serde(default)]
    pub liked: bool,
}

impl Like {
    pub fn new(id: impl Into<String>, ref_type: RefType, liked: bool) -> Self {
        Self {
            id: id.into(),
            ref_type,
            liked,
        }
    }

    /// Contribution of this like to a tally: `+1` if liked, `-1` otherwise.
    pub fn vote(&self) -> i64 {
        if self.liked {
            1
        } else {
            -1
        }
    }
}

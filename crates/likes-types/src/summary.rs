use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::like::Like;

/// Aggregate result of a filter query.
///
/// `total` counts `+1` for every liked match and `-1` for every other match.
/// `elapsed` covers only the matching pass, not marshaling or transport, and
/// travels on the wire as whole nanoseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikesSummary {
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub total: i64,
    #[serde(default, rename = "elapsedNanos", with = "nanos")]
    pub elapsed: Duration,
}

impl LikesSummary {
    /// Build a summary from matches already collected in store order.
    pub fn from_likes(likes: Vec<Like>, elapsed: Duration) -> Self {
        let total = likes.iter().map(Like::vote).sum();
        Self {
            likes,
            total,
            elapsed,
        }
    }

    pub fn len(&self) -> usize {
        self.likes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.likes.is_empty()
    }
}

mod nanos {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_nanos)
    }
}

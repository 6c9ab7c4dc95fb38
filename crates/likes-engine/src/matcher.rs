//! Pure match predicates over a single like.

use likes_types::{Like, RefType};

/// Exact identifier equality.
pub fn matches_id(like: &Like, id: &str) -> bool {
    like.id == id
}

/// Structural equality of the full composite key.
pub fn matches_ref_type(like: &Like, ref_type: &RefType) -> bool {
    like.ref_type == *ref_type
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_exact() {
        let like = Like::new("abc", RefType::default(), true);
        assert!(matches_id(&like, "abc"));
        assert!(!matches_id(&like, "ab"));
        assert!(!matches_id(&like, "ABC"));
    }

    #[test]
    fn empty_id_matches_only_empty() {
        let like = Like::new("", RefType::default(), true);
        assert!(matches_id(&like, ""));
        assert!(!matches_id(&Like::new("a", RefType::default(), true), ""));
    }

    #[test]
    fn ref_type_needs_both_fields() {
        let like = Like::new("a", RefType::new("beer", "1"), true);
        assert!(matches_ref_type(&like, &RefType::new("beer", "1")));
        assert!(!matches_ref_type(&like, &RefType::new("beer", "2")));
        assert!(!matches_ref_type(&like, &RefType::new("wine", "1")));
        assert!(!matches_ref_type(&like, &RefType::default()));
    }
}

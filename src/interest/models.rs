use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// Tracked interaction kinds, by rising intent strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Click,
    Wishlist,
    Cart,
    Purchase,
}

impl ActionKind {
    /// Intent strength of the interaction.
    #[must_use]
    pub fn weight(&self) -> f64 {
        match self {
            ActionKind::Click => 1.0,
            ActionKind::Wishlist => 2.0,
            ActionKind::Cart => 3.0,
            ActionKind::Purchase => 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestEntry {
    pub tag: String,
    pub score: f64,
}

/// Per-user mapping from normalized tag value to accumulated affinity score.
///
/// Entries keep insertion order, which is the tie-break order for top-K
/// eviction and top-tag selection; persisting the vector as an ordered entry
/// list keeps that order durable. Keys are unique and scores non-negative.
/// Owned by exactly one user record and mutated only through
/// [`super::InterestAccumulator`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestVector {
    entries: Vec<InterestEntry>,
}

impl InterestVector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[InterestEntry] {
        &self.entries
    }

    /// Accumulated score for a normalized tag value.
    pub fn score(&self, tag: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.tag == tag).map(|e| e.score)
    }

    /// The `n` strongest interests, score descending; ties keep the older tag.
    #[must_use]
    pub fn top_tags(&self, n: usize) -> Vec<InterestEntry> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(n);
        ranked
    }

    /// Adds `amount` to the entry for `tag`, appending a new entry when absent.
    pub(crate) fn bump(&mut self, tag: &str, amount: f64) {
        match self.entries.iter_mut().find(|e| e.tag == tag) {
            Some(entry) => entry.score += amount,
            None => self.entries.push(InterestEntry {
                tag: tag.to_string(),
                score: amount,
            }),
        }
    }

    /// Keeps the top `cap` entries by score; stable, so ties evict the newer tag.
    pub(crate) fn evict_to(&mut self, cap: usize) {
        if self.entries.len() <= cap {
            return;
        }
        self.entries
            .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        self.entries.truncate(cap);
    }

    pub(crate) fn scale(&mut self, factor: f64) {
        for entry in &mut self.entries {
            entry.score *= factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_weights() {
        assert_eq!(ActionKind::Click.weight(), 1.0);
        assert_eq!(ActionKind::Wishlist.weight(), 2.0);
        assert_eq!(ActionKind::Cart.weight(), 3.0);
        assert_eq!(ActionKind::Purchase.weight(), 5.0);
    }

    #[test]
    fn test_action_parse_snake_case() {
        assert_eq!("purchase".parse::<ActionKind>().unwrap(), ActionKind::Purchase);
        assert!("refund".parse::<ActionKind>().is_err());
    }

    #[test]
    fn test_bump_inserts_and_accumulates() {
        let mut vector = InterestVector::new();
        vector.bump("wood", 1.0);
        vector.bump("wood", 3.0);
        vector.bump("oak", 2.0);

        assert_eq!(vector.len(), 2);
        assert_eq!(vector.score("wood"), Some(4.0));
        assert_eq!(vector.score("oak"), Some(2.0));
    }

    #[test]
    fn test_top_tags_ties_keep_insertion_order() {
        let mut vector = InterestVector::new();
        vector.bump("first", 2.0);
        vector.bump("second", 2.0);
        vector.bump("third", 5.0);

        let top = vector.top_tags(2);
        assert_eq!(top[0].tag, "third");
        assert_eq!(top[1].tag, "first");
    }

    #[test]
    fn test_evict_keeps_highest() {
        let mut vector = InterestVector::new();
        vector.bump("a", 1.0);
        vector.bump("b", 3.0);
        vector.bump("c", 2.0);

        vector.evict_to(2);
        assert_eq!(vector.len(), 2);
        assert!(vector.score("a").is_none());
        assert_eq!(vector.score("b"), Some(3.0));
        assert_eq!(vector.score("c"), Some(2.0));
    }

    #[test]
    fn test_serde_round_trip_preserves_order() {
        let mut vector = InterestVector::new();
        vector.bump("wood", 4.0);
        vector.bump("oak", 4.0);

        let json = serde_json::to_string(&vector).unwrap();
        let back: InterestVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vector);
        assert_eq!(back.entries()[0].tag, "wood");
    }
}

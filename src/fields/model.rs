use serde::{Serialize, Deserialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Subject field identifier.
///
/// Ordered numerically when both ids are numeric, numeric ids before any
/// other id, and by plain string order otherwise. Weak-field tie-breaks rely
/// on this order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

/// The designated default field, first in scan order.
pub const DEFAULT_FIELD: &str = "0";

const KNOWN_FIELDS: [(&str, &str); 5] = [
    ("0", "Math"),
    ("1", "Implementation"),
    ("2", "Datastructure"),
    ("3", "Search"),
    ("4", "Sorting"),
];

impl FieldId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        FieldId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human label for the known fields
    pub fn name(&self) -> Option<&'static str> {
        KNOWN_FIELDS
            .iter()
            .find(|(id, _)| *id == self.0)
            .map(|(_, name)| *name)
    }

    fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        FieldId(id.to_string())
    }
}

impl From<String> for FieldId {
    fn from(id: String) -> Self {
        FieldId(id)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for FieldId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for FieldId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Upper bound applied to every field score before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreCap(u64);

impl ScoreCap {
    pub fn new(value: u64) -> Self {
        ScoreCap(value)
    }

    /// `per_tier_max * tier_count`, saturating
    pub fn from_tiers(per_tier_max: u64, tier_count: u64) -> Self {
        ScoreCap(per_tier_max.saturating_mul(tier_count))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldScoreVector {
    scores: BTreeMap<FieldId, u64>,
}

impl FieldScoreVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every known field at zero, the shape a fresh profile starts with
    pub fn with_default_fields() -> Self {
        KNOWN_FIELDS.iter().map(|(id, _)| (FieldId::from(*id), 0)).collect()
    }

    pub fn set<F: Into<FieldId>>(&mut self, field: F, score: u64) {
        self.scores.insert(field.into(), score);
    }

    pub fn get(&self, field: &str) -> Option<u64> {
        self.scores.get(&FieldId::from(field)).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Fields in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, u64)> {
        self.scores.iter().map(|(k, v)| (k, *v))
    }

    /// A new vector with every score clipped to `cap`
    pub fn capped(&self, cap: ScoreCap) -> FieldScoreVector {
        self.iter()
            .map(|(field, score)| (field.clone(), score.min(cap.value())))
            .collect()
    }

    /// Lowest-scoring field. Scans in ascending id order and only moves on a
    /// strictly smaller score, so ties go to the earliest field.
    pub fn weakest_field(&self) -> Option<(FieldId, u64)> {
        let mut iter = self.iter();
        let (first, first_score) = iter.next()?;
        let mut weakest = (first, first_score);
        for (field, score) in iter {
            if score < weakest.1 {
                weakest = (field, score);
            }
        }
        Some((weakest.0.clone(), weakest.1))
    }
}

impl<F: Into<FieldId>> FromIterator<(F, u64)> for FieldScoreVector {
    fn from_iter<I: IntoIterator<Item = (F, u64)>>(iter: I) -> Self {
        FieldScoreVector {
            scores: iter.into_iter().map(|(f, s)| (f.into(), s)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_order_numerically() {
        let mut ids: Vec<FieldId> = ["10", "2", "x", "0", "1"].iter().map(|s| FieldId::from(*s)).collect();
        ids.sort();
        let ordered: Vec<&str> = ids.iter().map(|f| f.as_str()).collect();
        assert_eq!(ordered, vec!["0", "1", "2", "10", "x"]);
    }

    #[test]
    fn capping_leaves_original_untouched() {
        let raw: FieldScoreVector = vec![("0", 150), ("1", 40)].into_iter().collect();
        let capped = raw.capped(ScoreCap::new(100));
        assert_eq!(capped.get("0"), Some(100));
        assert_eq!(capped.get("1"), Some(40));
        assert_eq!(raw.get("0"), Some(150));
    }

    #[test]
    fn tie_resolves_to_default_field() {
        let scores: FieldScoreVector =
            vec![("2", 5), ("0", 5), ("1", 9), ("3", 7), ("4", 6)].into_iter().collect();
        assert_eq!(scores.weakest_field(), Some((FieldId::from(DEFAULT_FIELD), 5)));
    }

    #[test]
    fn strictly_smaller_score_wins() {
        let scores: FieldScoreVector = vec![("0", 40), ("1", 10), ("2", 90)].into_iter().collect();
        assert_eq!(scores.weakest_field(), Some((FieldId::from("1"), 10)));
    }

    #[test]
    fn empty_vector_has_no_weakest_field() {
        assert_eq!(FieldScoreVector::new().weakest_field(), None);
    }

    #[test]
    fn default_fields_are_named() {
        let scores = FieldScoreVector::with_default_fields();
        assert_eq!(scores.len(), 5);
        assert_eq!(FieldId::from("3").name(), Some("Search"));
        assert_eq!(FieldId::from("9").name(), None);
    }

    #[test]
    fn cap_from_tiers_saturates() {
        assert_eq!(ScoreCap::from_tiers(5, 20).value(), 100);
        assert_eq!(ScoreCap::from_tiers(u64::MAX, 2).value(), u64::MAX);
    }
}

use serde::{Deserialize, Serialize};

use crate::fields::model::FieldId;
use crate::progress::model::JudgeStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleType {
    #[serde(rename = "ACM")]
    Acm,
    #[serde(rename = "OI")]
    Oi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    VeryLow,
    Low,
    Mid,
    High,
    VeryHigh,
}

/// A problem as handed to listings and recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemView {
    pub id: u64,
    #[serde(rename = "_id")]
    pub display_id: String,
    pub title: String,
    pub rule_type: RuleType,
    pub field: FieldId,
    pub difficulty: Difficulty,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub contest_id: Option<u64>,
    #[serde(default)]
    pub is_bonus: bool,
    /// Null when the user never attempted the problem or is anonymous
    #[serde(default)]
    pub my_status: Option<JudgeStatus>,
}

fn default_visible() -> bool {
    true
}

impl ProblemView {
    /// Key of this problem in a progress map
    pub fn progress_key(&self) -> String {
        self.id.to_string()
    }

    /// Visible and not bound to a contest
    pub fn is_public(&self) -> bool {
        self.visible && self.contest_id.is_none()
    }
}

/// One problem, a page of problems, or an unpaginated list.
///
/// Serialized untagged: a page is `{"results": [...], "total": n}`, a single
/// problem is the bare object and a list is a bare array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProblemCollection {
    Page { results: Vec<ProblemView>, total: u64 },
    List(Vec<ProblemView>),
    Single(ProblemView),
}

impl ProblemCollection {
    pub fn page(results: Vec<ProblemView>, total: u64) -> Self {
        ProblemCollection::Page { results, total }
    }

    pub fn problems(&self) -> &[ProblemView] {
        match self {
            ProblemCollection::Single(problem) => std::slice::from_ref(problem),
            ProblemCollection::Page { results, .. } => results,
            ProblemCollection::List(problems) => problems,
        }
    }

    pub fn problems_mut(&mut self) -> &mut [ProblemView] {
        match self {
            ProblemCollection::Single(problem) => std::slice::from_mut(problem),
            ProblemCollection::Page { results, .. } => results,
            ProblemCollection::List(problems) => problems,
        }
    }

    pub fn len(&self) -> usize {
        self.problems().len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(id: u64) -> ProblemView {
        ProblemView {
            id,
            display_id: format!("{}", 1000 + id),
            title: "A + B".to_string(),
            rule_type: RuleType::Acm,
            field: FieldId::from("0"),
            difficulty: Difficulty::Low,
            visible: true,
            contest_id: None,
            is_bonus: false,
            my_status: None,
        }
    }

    #[test]
    fn page_serializes_with_results_key() {
        let page = ProblemCollection::page(vec![problem(1)], 1);
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["results"][0]["_id"], "1001");
        assert_eq!(value["results"][0]["rule_type"], "ACM");
        assert!(value["results"][0]["my_status"].is_null());
    }

    #[test]
    fn untagged_shapes_deserialize_to_matching_variant() {
        let single = serde_json::to_string(&problem(2)).unwrap();
        let parsed: ProblemCollection = serde_json::from_str(&single).unwrap();
        assert!(matches!(parsed, ProblemCollection::Single(_)));

        let list = serde_json::to_string(&vec![problem(2), problem(3)]).unwrap();
        let parsed: ProblemCollection = serde_json::from_str(&list).unwrap();
        assert!(matches!(parsed, ProblemCollection::List(ref v) if v.len() == 2));
    }

    #[test]
    fn single_exposes_one_element_slice() {
        let mut single = ProblemCollection::Single(problem(5));
        assert_eq!(single.problems_mut().len(), 1);
        assert_eq!(single.problems()[0].progress_key(), "5");
    }

    #[test]
    fn public_means_visible_and_outside_contests() {
        let mut p = problem(1);
        assert!(p.is_public());
        p.contest_id = Some(3);
        assert!(!p.is_public());
        p.contest_id = None;
        p.visible = false;
        assert!(!p.is_public());
    }
}

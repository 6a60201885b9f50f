use serde::{Serialize, Deserialize};
use std::collections::{HashMap, HashSet};

use crate::problems::problem::RuleType;

/// Judge result codes, stored as the integers the judge writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum JudgeStatus {
    CompileError,
    WrongAnswer,
    Accepted,
    CpuTimeLimitExceeded,
    RealTimeLimitExceeded,
    MemoryLimitExceeded,
    RuntimeError,
    SystemError,
    Pending,
    Judging,
    PartiallyAccepted,
}

impl JudgeStatus {
    pub fn code(self) -> i32 {
        match self {
            JudgeStatus::CompileError => -2,
            JudgeStatus::WrongAnswer => -1,
            JudgeStatus::Accepted => 0,
            JudgeStatus::CpuTimeLimitExceeded => 1,
            JudgeStatus::RealTimeLimitExceeded => 2,
            JudgeStatus::MemoryLimitExceeded => 3,
            JudgeStatus::RuntimeError => 4,
            JudgeStatus::SystemError => 5,
            JudgeStatus::Pending => 6,
            JudgeStatus::Judging => 7,
            JudgeStatus::PartiallyAccepted => 8,
        }
    }

    pub fn is_accepted(self) -> bool {
        self == JudgeStatus::Accepted
    }
}

impl TryFrom<i32> for JudgeStatus {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Ok(match code {
            -2 => JudgeStatus::CompileError,
            -1 => JudgeStatus::WrongAnswer,
            0 => JudgeStatus::Accepted,
            1 => JudgeStatus::CpuTimeLimitExceeded,
            2 => JudgeStatus::RealTimeLimitExceeded,
            3 => JudgeStatus::MemoryLimitExceeded,
            4 => JudgeStatus::RuntimeError,
            5 => JudgeStatus::SystemError,
            6 => JudgeStatus::Pending,
            7 => JudgeStatus::Judging,
            8 => JudgeStatus::PartiallyAccepted,
            other => return Err(format!("unknown judge status code {}", other)),
        })
    }
}

impl From<JudgeStatus> for i32 {
    fn from(status: JudgeStatus) -> i32 {
        status.code()
    }
}

/// A user's recorded progress on one problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(rename = "_id")]
    pub problem_id: String,
    pub status: JudgeStatus,
    /// Only OI progress carries a score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
}

/// Progress keyed by the stringified internal problem id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressMap(HashMap<String, ProgressRecord>);

impl ProgressMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>>(&mut self, key: K, record: ProgressRecord) {
        self.0.insert(key.into(), record);
    }

    pub fn get(&self, key: &str) -> Option<&ProgressRecord> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &ProgressRecord> {
        self.0.values()
    }
}

/// Whether progress is tracked against the general catalog or a contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Global,
    Contest,
}

/// Progress for one rule type, split by scope. Either half may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleProgress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problems: Option<ProgressMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contest_problems: Option<ProgressMap>,
}

impl RuleProgress {
    pub fn scope(&self, scope: Scope) -> Option<&ProgressMap> {
        match scope {
            Scope::Global => self.problems.as_ref(),
            Scope::Contest => self.contest_problems.as_ref(),
        }
    }
}

/// The four disjoint progress namespaces of one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressMapSet {
    #[serde(default, rename = "acm_problems_status")]
    pub acm: RuleProgress,
    #[serde(default, rename = "oi_problems_status")]
    pub oi: RuleProgress,
}

impl ProgressMapSet {
    /// The namespace for a rule and scope, `None` when it was never recorded.
    pub fn namespace(&self, rule: RuleType, scope: Scope) -> Option<&ProgressMap> {
        match rule {
            RuleType::Acm => self.acm.scope(scope),
            RuleType::Oi => self.oi.scope(scope),
        }
    }

    pub fn namespace_mut(&mut self, rule: RuleType, scope: Scope) -> &mut ProgressMap {
        let progress = match rule {
            RuleType::Acm => &mut self.acm,
            RuleType::Oi => &mut self.oi,
        };
        let slot = match scope {
            Scope::Global => &mut progress.problems,
            Scope::Contest => &mut progress.contest_problems,
        };
        slot.get_or_insert_with(ProgressMap::new)
    }
}

/// Display ids of every problem accepted under global ACM progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolvedIdSet(HashSet<String>);

impl SolvedIdSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_progress(progress: &ProgressMapSet) -> Self {
        let solved: HashSet<String> = progress
            .namespace(RuleType::Acm, Scope::Global)
            .map(|map| {
                map.records()
                    .filter(|r| r.status.is_accepted())
                    .map(|r| r.problem_id.clone())
                    .collect()
            })
            .unwrap_or_default();
        SolvedIdSet(solved)
    }

    pub fn contains(&self, problem_id: &str) -> bool {
        self.0.contains(problem_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SolvedIdSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SolvedIdSet(iter.into_iter().map(Into::into).collect())
    }
}

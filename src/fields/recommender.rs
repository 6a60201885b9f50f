use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::OjError;
use crate::fields::model::{FieldId, FieldScoreVector, ScoreCap};
use crate::problems::problem::ProblemView;
use crate::progress::model::SolvedIdSet;

pub const DEFAULT_SAMPLE_SIZE: usize = 3;

/// Source of candidate problems per field.
///
/// Implementations return only visible problems that belong to no contest.
pub trait FieldProblemLookup {
    fn problems_in_field(&self, field: &FieldId) -> Vec<ProblemView>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub field_scores: FieldScoreVector,
    pub max_score: ScoreCap,
    pub weak_field: Option<FieldId>,
    pub recommended_problems: Vec<ProblemView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeakFieldRecommender {
    sample_size: usize,
}

impl Default for WeakFieldRecommender {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_SIZE)
    }
}

impl WeakFieldRecommender {
    pub fn new(sample_size: usize) -> Self {
        WeakFieldRecommender { sample_size }
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Recommend unsolved problems from the user's weakest field.
    ///
    /// `scores` is `None` when the user has no profile; that is reported as
    /// `ProfileNotFound` rather than recommending from a default field.
    pub fn recommend<L, R>(
        &self,
        user_id: u64,
        scores: Option<&FieldScoreVector>,
        cap: ScoreCap,
        pool: &L,
        solved: &SolvedIdSet,
        rng: &mut R,
    ) -> Result<RecommendationResult, OjError>
    where
        L: FieldProblemLookup + ?Sized,
        R: Rng + ?Sized,
    {
        let scores = scores.ok_or_else(|| OjError::profile_not_found(user_id))?;
        let field_scores = scores.capped(cap);

        let weak_field = match field_scores.weakest_field() {
            Some((field, _)) => field,
            None => {
                tracing::debug!(user_id = user_id, "Empty field score vector, nothing to recommend");
                return Ok(RecommendationResult {
                    field_scores,
                    max_score: cap,
                    weak_field: None,
                    recommended_problems: Vec::new(),
                });
            }
        };

        let unresolved: Vec<ProblemView> = pool
            .problems_in_field(&weak_field)
            .into_iter()
            .filter(|p| !solved.contains(&p.display_id))
            .collect();

        let take = self.sample_size.min(unresolved.len());
        let recommended_problems: Vec<ProblemView> = unresolved
            .choose_multiple(rng, take)
            .cloned()
            .map(|mut p| {
                p.my_status = None;
                p
            })
            .collect();

        tracing::debug!(
            user_id = user_id,
            weak_field = %weak_field,
            unresolved = unresolved.len(),
            sampled = recommended_problems.len(),
            "Weak field recommendation computed"
        );

        Ok(RecommendationResult {
            field_scores,
            max_score: cap,
            weak_field: Some(weak_field),
            recommended_problems,
        })
    }
}

impl<F> FieldProblemLookup for F
where
    F: Fn(&FieldId) -> Vec<ProblemView>,
{
    fn problems_in_field(&self, field: &FieldId) -> Vec<ProblemView> {
        self(field)
    }
}

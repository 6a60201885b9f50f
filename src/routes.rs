use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::error::{ErrorKind, OjError};
use crate::fields::model::FieldId;
use crate::fields::recommender::{RecommendationResult, WeakFieldRecommender};
use crate::logging::log_recommendation;
use crate::problems::annotator::StatusAnnotator;
use crate::problems::problem::{ProblemCollection, ProblemView};
use crate::profiles::store::UserId;
use crate::progress::model::{ProgressMapSet, SolvedIdSet};
use crate::state::app::AppState;

/// Who is asking. Authentication itself happens upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub user: Option<UserId>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        RequestContext { user: None }
    }

    pub fn user(user_id: UserId) -> Self {
        RequestContext { user: Some(user_id) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub user_id: UserId,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: RecommendationResult,
}

/// Progress snapshot for annotation. An authenticated user without a profile
/// is annotated as if they had no progress.
fn progress_for(state: &AppState, ctx: &RequestContext) -> ProgressMapSet {
    let Some(user_id) = ctx.user else {
        return ProgressMapSet::default();
    };
    match state.profiles.get_progress_maps(user_id) {
        Ok(progress) => progress,
        Err(e) => {
            tracing::warn!(user_id = user_id, error = %e, "No profile for authenticated user, annotating without progress");
            ProgressMapSet::default()
        }
    }
}

fn annotate(state: &AppState, ctx: &RequestContext, annotator: StatusAnnotator, collection: &mut ProblemCollection) {
    let progress = progress_for(state, ctx);
    let annotated = annotator.annotate(collection, &progress, ctx.is_authenticated());
    state.metrics.record_annotated(annotated);
}

fn problem_not_found(display_id: &str) -> OjError {
    OjError::new(ErrorKind::ProblemNotFound, "Problem does not exist", "routes")
        .with_context(format!("problem_id: {}", display_id))
}

/// Problem detail page for the general catalog
pub fn get_problem(state: &AppState, ctx: &RequestContext, display_id: &str) -> Result<ProblemCollection, OjError> {
    let problem = state
        .catalog
        .find_public(display_id)
        .cloned()
        .ok_or_else(|| problem_not_found(display_id))?;

    let mut collection = ProblemCollection::Single(problem);
    annotate(state, ctx, StatusAnnotator::global(), &mut collection);
    Ok(collection)
}

/// One page of the general catalog, optionally restricted to a field
pub fn list_problems(
    state: &AppState,
    ctx: &RequestContext,
    field: Option<&FieldId>,
    offset: usize,
    limit: usize,
) -> Result<ProblemCollection, OjError> {
    if limit == 0 {
        return Err(OjError::new(ErrorKind::InvalidArgument, "Limit is needed", "routes"));
    }

    let matching: Vec<&ProblemView> = state
        .catalog
        .public_problems()
        .filter(|p| field.map_or(true, |f| &p.field == f))
        .collect();
    let total = matching.len() as u64;
    let results = matching.into_iter().skip(offset).take(limit).cloned().collect();

    let mut collection = ProblemCollection::page(results, total);
    annotate(state, ctx, StatusAnnotator::global(), &mut collection);
    Ok(collection)
}

/// All visible problems of a contest. Permission checks happen upstream.
pub fn list_contest_problems(state: &AppState, ctx: &RequestContext, contest_id: u64) -> ProblemCollection {
    let problems = state.catalog.contest_problems(contest_id).cloned().collect();
    let mut collection = ProblemCollection::List(problems);
    annotate(state, ctx, StatusAnnotator::contest(), &mut collection);
    collection
}

pub fn get_contest_problem(
    state: &AppState,
    ctx: &RequestContext,
    contest_id: u64,
    display_id: &str,
) -> Result<ProblemCollection, OjError> {
    let problem = state
        .catalog
        .find_in_contest(contest_id, display_id)
        .cloned()
        .ok_or_else(|| problem_not_found(display_id).with_context(format!("contest_id: {}", contest_id)))?;

    let mut collection = ProblemCollection::Single(problem);
    annotate(state, ctx, StatusAnnotator::contest(), &mut collection);
    Ok(collection)
}

/// Recommend problems from the requesting user's weakest field.
///
/// Field scores and the solved set come from a single profile read.
pub fn recommend_problems<R: Rng + ?Sized>(
    state: &AppState,
    ctx: &RequestContext,
    rng: &mut R,
) -> Result<RecommendResponse, OjError> {
    let user_id = match ctx.user {
        Some(user_id) => user_id,
        None => {
            state.metrics.record_profile_not_found();
            return Err(OjError::new(ErrorKind::ProfileNotFound, "Login required", "routes"));
        }
    };

    let profile = state.profiles.get_profile(user_id);
    let solved = profile
        .as_ref()
        .map(|p| SolvedIdSet::from_progress(&p.progress))
        .unwrap_or_default();

    let recommender = WeakFieldRecommender::new(state.settings.recommend.sample_size);
    let result = recommender
        .recommend(
            user_id,
            profile.as_ref().map(|p| &p.field_score),
            state.settings.scoring.score_cap(),
            &*state.catalog,
            &solved,
            rng,
        )
        .map_err(|e| {
            if e.kind == ErrorKind::ProfileNotFound {
                state.metrics.record_profile_not_found();
            }
            e
        })?;

    let sampled = result.recommended_problems.len();
    state.metrics.record_recommendation(sampled);
    log_recommendation(user_id, result.weak_field.as_ref().map(|f| f.as_str()), sampled);

    Ok(RecommendResponse {
        user_id,
        generated_at: Utc::now(),
        result,
    })
}

pub fn pick_one<R: Rng + ?Sized>(state: &AppState, rng: &mut R) -> Result<String, OjError> {
    state.catalog.pick_one(rng)
}

pub fn bonus_problems(state: &AppState) -> Result<Vec<ProblemView>, OjError> {
    let bonus = state.catalog.bonus_problems();
    if bonus.is_empty() {
        return Err(OjError::new(ErrorKind::ProblemNotFound, "No bonus problem", "routes"));
    }
    Ok(bonus)
}

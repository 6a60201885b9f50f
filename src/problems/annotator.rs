use crate::problems::problem::ProblemCollection;
use crate::progress::model::{ProgressMapSet, Scope};

/// Writes the requesting user's `my_status` into problem listings.
///
/// The scope is fixed per request (global listing vs. a bound contest); the
/// rule type is read from each problem, so one contest listing can pull from
/// both the ACM and the OI namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAnnotator {
    scope: Scope,
}

impl StatusAnnotator {
    pub fn new(scope: Scope) -> Self {
        StatusAnnotator { scope }
    }

    pub fn global() -> Self {
        Self::new(Scope::Global)
    }

    pub fn contest() -> Self {
        Self::new(Scope::Contest)
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Overwrite `my_status` on every problem in `collection`.
    ///
    /// Anonymous requests get null everywhere. Otherwise a problem gets the
    /// status recorded under its stringified id in the namespace for its rule
    /// and this annotator's scope, or null when there is none. Returns how
    /// many problems received a status.
    pub fn annotate(
        &self,
        collection: &mut ProblemCollection,
        progress: &ProgressMapSet,
        authenticated: bool,
    ) -> usize {
        let problems = collection.problems_mut();

        if !authenticated {
            for problem in problems.iter_mut() {
                problem.my_status = None;
            }
            return 0;
        }

        let mut annotated = 0;
        for problem in problems.iter_mut() {
            problem.my_status = progress
                .namespace(problem.rule_type, self.scope)
                .and_then(|map| map.get(&problem.progress_key()))
                .map(|record| record.status);
            if problem.my_status.is_some() {
                annotated += 1;
            }
        }

        tracing::debug!(
            scope = ?self.scope,
            total = problems.len(),
            annotated = annotated,
            "Annotated problem statuses"
        );
        annotated
    }
}

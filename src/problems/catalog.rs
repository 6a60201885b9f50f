use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{ErrorKind, OjError};
use crate::fields::model::FieldId;
use crate::fields::recommender::FieldProblemLookup;
use crate::problems::problem::ProblemView;

/// Read-only snapshot of the problem catalog.
#[derive(Debug, Clone, Default)]
pub struct ProblemCatalog {
    problems: Vec<ProblemView>,
}

impl ProblemCatalog {
    pub fn from_problems(mut problems: Vec<ProblemView>) -> Self {
        problems.sort_by_key(|p| p.id);
        ProblemCatalog { problems }
    }

    /// Load every `*.json` file in `dir`, one problem per file.
    ///
    /// A missing directory yields an empty catalog; an unparsable file fails
    /// the whole load.
    pub async fn load_dir(dir: &Path) -> Result<Self, OjError> {
        if !tokio::fs::try_exists(dir).await.unwrap_or(false) {
            tracing::warn!(path = ?dir, "Problems directory not found, catalog is empty");
            return Ok(Self::default());
        }

        let mut problems = Vec::new();
        let mut entries = tokio::fs::read_dir(dir)
            .await
            .map_err(|e| OjError::from(e).with_context(format!("path: {:?}", dir)))?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let content = tokio::fs::read_to_string(&path).await?;
            let problem: ProblemView = serde_json::from_str(&content)
                .map_err(|e| OjError::from(e).with_context(format!("path: {:?}", path)))?;
            problems.push(problem);
        }

        tracing::info!(path = ?dir, count = problems.len(), "Problem catalog loaded");
        Ok(Self::from_problems(problems))
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Visible problems outside contests, in id order
    pub fn public_problems(&self) -> impl Iterator<Item = &ProblemView> {
        self.problems.iter().filter(|p| p.is_public())
    }

    pub fn find_public(&self, display_id: &str) -> Option<&ProblemView> {
        self.public_problems().find(|p| p.display_id == display_id)
    }

    /// Visible problems of one contest, in id order
    pub fn contest_problems(&self, contest_id: u64) -> impl Iterator<Item = &ProblemView> {
        self.problems
            .iter()
            .filter(move |p| p.visible && p.contest_id == Some(contest_id))
    }

    pub fn find_in_contest(&self, contest_id: u64, display_id: &str) -> Option<&ProblemView> {
        self.contest_problems(contest_id).find(|p| p.display_id == display_id)
    }

    pub fn bonus_problems(&self) -> Vec<ProblemView> {
        self.public_problems().filter(|p| p.is_bonus).cloned().collect()
    }

    /// Display id of a uniformly random public problem
    pub fn pick_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, OjError> {
        let public: Vec<&ProblemView> = self.public_problems().collect();
        public
            .choose(rng)
            .map(|p| p.display_id.clone())
            .ok_or_else(|| OjError::new(ErrorKind::NoProblemAvailable, "No problem to pick", "catalog"))
    }
}

impl FieldProblemLookup for ProblemCatalog {
    fn problems_in_field(&self, field: &FieldId) -> Vec<ProblemView> {
        self.public_problems()
            .filter(|p| &p.field == field)
            .cloned()
            .collect()
    }
}

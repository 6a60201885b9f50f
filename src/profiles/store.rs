use std::collections::HashMap;
use std::path::Path;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::OjError;
use crate::fields::model::FieldScoreVector;
use crate::progress::model::ProgressMapSet;

pub type UserId = u64;

/// Per-user profile snapshot: judge progress plus field scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    #[serde(flatten)]
    pub progress: ProgressMapSet,
    #[serde(default = "FieldScoreVector::with_default_fields")]
    pub field_score: FieldScoreVector,
}

impl UserProfile {
    pub fn new(user_id: UserId) -> Self {
        UserProfile {
            user_id,
            progress: ProgressMapSet::default(),
            field_score: FieldScoreVector::with_default_fields(),
        }
    }
}

/// Read access to user profiles.
pub trait ProfileStore: Send + Sync {
    fn get_profile(&self, user_id: UserId) -> Option<UserProfile>;

    fn get_field_scores(&self, user_id: UserId) -> Result<FieldScoreVector, OjError> {
        self.get_profile(user_id)
            .map(|p| p.field_score)
            .ok_or_else(|| OjError::profile_not_found(user_id))
    }

    fn get_progress_maps(&self, user_id: UserId) -> Result<ProgressMapSet, OjError> {
        self.get_profile(user_id)
            .map(|p| p.progress)
            .ok_or_else(|| OjError::profile_not_found(user_id))
    }
}

/// Profiles held in memory, loaded once from a JSON array.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<UserId, UserProfile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_profiles<I: IntoIterator<Item = UserProfile>>(profiles: I) -> Self {
        let store = Self::new();
        store.replace_all(profiles);
        store
    }

    /// Load profiles from a JSON array file.
    ///
    /// A missing file gives an empty store. Malformed content is an error.
    pub async fn load_json(path: &Path) -> Result<Self, OjError> {
        let data = match tokio::fs::read_to_string(path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = ?path, "Profiles file not found, store is empty");
                return Ok(Self::new());
            }
            Err(e) => {
                return Err(OjError::from(e).with_context(format!("path: {:?}", path)));
            }
        };

        let profiles: Vec<UserProfile> = serde_json::from_str(&data)
            .map_err(|e| OjError::from(e).with_context(format!("path: {:?}", path)))?;
        tracing::info!(path = ?path, count = profiles.len(), "Profiles loaded");
        Ok(Self::from_profiles(profiles))
    }

    pub fn insert(&self, profile: UserProfile) {
        self.profiles.write().insert(profile.user_id, profile);
    }

    pub fn replace_all<I: IntoIterator<Item = UserProfile>>(&self, profiles: I) {
        let map = profiles.into_iter().map(|p| (p.user_id, p)).collect();
        *self.profiles.write() = map;
    }

    pub fn len(&self) -> usize {
        self.profiles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.read().is_empty()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn get_profile(&self, user_id: UserId) -> Option<UserProfile> {
        self.profiles.read().get(&user_id).cloned()
    }
}

// ==========================================
// Sistema de Asignación de Bodega - allocation profiles
// ==========================================
// A profile bundles the two knobs that differed between the historical
// sheet variants: the ordering-key sequence and which physical
// dimensions the summaries track. Profiles are serde objects so custom
// ones can be loaded from JSON.
// ==========================================

use crate::engine::ordering::{LocalityKey, MatchOrderingPolicy};
use crate::engine::Allocator;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Built-in profile names, also accepted on the CLI.
pub const PROFILE_RACKED: &str = "racked";
pub const PROFILE_BY_LEVEL: &str = "by_level";
pub const PROFILE_INSERTION: &str = "insertion";

// ==========================================
// AllocationProfile
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationProfile {
    /// Profile ID (used for selection/reference).
    pub profile_id: String,

    /// Display name.
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Locality tie-break keys applied after fit tightness, in order.
    #[serde(default)]
    pub ordering: Vec<LocalityKey>,

    /// Whether summaries aggregate the rack dimension.
    #[serde(default)]
    pub track_racks: bool,
}

impl AllocationProfile {
    /// Multi-rack warehouse: rack -> level -> row -> position, rack
    /// aggregation in summaries.
    pub fn racked() -> Self {
        Self {
            profile_id: PROFILE_RACKED.to_string(),
            title: "Bodega con racks".to_string(),
            description: Some("Desempate por rack, nivel, fila y posición".to_string()),
            ordering: vec![
                LocalityKey::Rack,
                LocalityKey::Level,
                LocalityKey::Row,
                LocalityKey::Position,
            ],
            track_racks: true,
        }
    }

    /// Single-rack warehouse: level -> row -> position.
    pub fn by_level() -> Self {
        Self {
            profile_id: PROFILE_BY_LEVEL.to_string(),
            title: "Bodega de rack único".to_string(),
            description: Some("Desempate por nivel, fila y posición".to_string()),
            ordering: vec![LocalityKey::Level, LocalityKey::Row, LocalityKey::Position],
            track_racks: false,
        }
    }

    /// No locality tie-break: equal-slack slots keep catalog order.
    pub fn insertion() -> Self {
        Self {
            profile_id: PROFILE_INSERTION.to_string(),
            title: "Orden de carga".to_string(),
            description: None,
            ordering: Vec::new(),
            track_racks: false,
        }
    }

    /// Look up a built-in profile by ID.
    pub fn builtin(profile_id: &str) -> Option<Self> {
        match profile_id {
            PROFILE_RACKED => Some(Self::racked()),
            PROFILE_BY_LEVEL => Some(Self::by_level()),
            PROFILE_INSERTION => Some(Self::insertion()),
            _ => None,
        }
    }

    /// Load a custom profile from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ProfileError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ProfileError::Read(path.display().to_string(), e))?;
        let profile = serde_json::from_str(&raw)?;
        Ok(profile)
    }

    pub fn ordering_policy(&self) -> MatchOrderingPolicy {
        MatchOrderingPolicy::new(self.ordering.clone())
    }

    /// Build the allocator this profile describes.
    pub fn allocator(&self) -> Allocator {
        Allocator::new(self.ordering_policy(), self.track_racks)
    }
}

impl Default for AllocationProfile {
    fn default() -> Self {
        Self::by_level()
    }
}

// ==========================================
// ProfileError
// ==========================================
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("cannot read profile file {0}: {1}")]
    Read(String, #[source] std::io::Error),

    #[error("invalid profile JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown profile: {0}")]
    Unknown(String),
}

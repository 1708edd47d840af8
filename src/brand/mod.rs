//! Brand profiles and the in-memory registry the orchestrator resolves them from.

pub mod demo;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::contracts::JsonMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub scale: Vec<String>,
    pub font_family: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityTargets {
    pub wcag: String,
    pub min_contrast: f64,
    pub tap_target: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tone {
    pub style: String,
    #[serde(default)]
    pub do_nots: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    pub brand_id: String,
    pub typography: Typography,
    #[serde(default)]
    pub colors: JsonMap,
    #[serde(default)]
    pub spacing: Vec<u32>,
    pub a11y: AccessibilityTargets,
    pub tone: Tone,
    #[serde(default)]
    pub token_allowlist: Vec<String>,
}

/// Brand profiles keyed by brand id.
#[derive(Debug, Default)]
pub struct BrandRegistry {
    profiles: RwLock<HashMap<String, BrandProfile>>,
}

impl BrandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile, replacing any previous one with the same id.
    pub fn insert(&self, profile: BrandProfile) {
        let mut profiles = self
            .profiles
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        profiles.insert(profile.brand_id.clone(), profile);
    }

    pub fn get(&self, brand_id: &str) -> Option<BrandProfile> {
        let profiles = self
            .profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        profiles.get(brand_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Weight table for the neighborhood score.
//!
//! Every category has a weight, a saturation scale and a direction. The
//! defaults below can be overridden per category from a TOML file:
//!
//! ```toml
//! bonus_cap = 8.0
//!
//! [categories.crime]
//! weight = 0.40
//! scale = 20.0
//!
//! [categories.cameras]
//! weight = 0.05
//! ```
//!
//! Overrides are validated after they are applied, so a file that changes one
//! negative weight must rebalance the others to keep the sum at 1.0.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::metrics::Category;

/// Whether a higher count makes a block worse or better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Negative,
    Positive,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryConfig {
    pub category: Category,
    pub direction: Direction,
    /// Share of the base score (negative categories only, sums to 1.0).
    pub weight: f64,
    /// Count at which the curve reaches ~63% of its maximum.
    pub scale: f64,
}

// Negative-signal weights (must sum to 1.0).
pub const W_CRIME: f64 = 0.35;
pub const W_CRASHES: f64 = 0.25;
pub const W_VIOLATIONS: f64 = 0.15;
pub const W_SERVICE_REQUESTS: f64 = 0.15;
pub const W_CAMERAS: f64 = 0.10;

// Saturation scales. Crime saturates fastest among the high-weight
// categories; camera citations run into the hundreds on arterial streets.
pub const SCALE_CRIME: f64 = 25.0;
pub const SCALE_CRASHES: f64 = 15.0;
pub const SCALE_VIOLATIONS: f64 = 10.0;
pub const SCALE_SERVICE_REQUESTS: f64 = 40.0;
pub const SCALE_CAMERAS: f64 = 500.0;
pub const SCALE_POTHOLES: f64 = 20.0;
pub const SCALE_PERMITS: f64 = 10.0;
pub const SCALE_LICENSES: f64 = 10.0;

/// Points per unit of positive-signal saturation.
pub const BONUS_SCALE: f64 = 5.0;
/// Maximum points positive signals may add.
pub const BONUS_CAP: f64 = 10.0;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

const fn negative(category: Category, weight: f64, scale: f64) -> CategoryConfig {
    CategoryConfig {
        category,
        direction: Direction::Negative,
        weight,
        scale,
    }
}

const fn positive(category: Category, scale: f64) -> CategoryConfig {
    CategoryConfig {
        category,
        direction: Direction::Positive,
        weight: 0.0,
        scale,
    }
}

/// Default table, indexed in canonical `Category` order.
const DEFAULT_CATEGORIES: [CategoryConfig; 8] = [
    negative(Category::Crime, W_CRIME, SCALE_CRIME),
    negative(Category::Crashes, W_CRASHES, SCALE_CRASHES),
    negative(Category::Violations, W_VIOLATIONS, SCALE_VIOLATIONS),
    negative(
        Category::ServiceRequests,
        W_SERVICE_REQUESTS,
        SCALE_SERVICE_REQUESTS,
    ),
    negative(Category::Cameras, W_CAMERAS, SCALE_CAMERAS),
    positive(Category::Potholes, SCALE_POTHOLES),
    positive(Category::Permits, SCALE_PERMITS),
    positive(Category::Licenses, SCALE_LICENSES),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringConfig {
    pub categories: [CategoryConfig; 8],
    pub bonus_scale: f64,
    pub bonus_cap: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES,
            bonus_scale: BONUS_SCALE,
            bonus_cap: BONUS_CAP,
        }
    }
}

/// On-disk override format. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    bonus_scale: Option<f64>,
    bonus_cap: Option<f64>,
    #[serde(default)]
    categories: BTreeMap<String, CategoryOverride>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryOverride {
    weight: Option<f64>,
    scale: Option<f64>,
}

impl ScoringConfig {
    pub fn get(&self, category: Category) -> &CategoryConfig {
        &self.categories[category as usize]
    }

    /// Categories with the given direction, in canonical order.
    pub fn by_direction(&self, direction: Direction) -> impl Iterator<Item = &CategoryConfig> {
        self.categories
            .iter()
            .filter(move |c| c.direction == direction)
    }

    /// Apply a TOML override document on top of the defaults.
    pub fn from_toml_str(text: &str) -> Result<ScoringConfig> {
        let file: ConfigFile = toml::from_str(text)?;
        let mut config = ScoringConfig::default();

        if let Some(v) = file.bonus_scale {
            config.bonus_scale = v;
        }
        if let Some(v) = file.bonus_cap {
            config.bonus_cap = v;
        }
        for (key, over) in &file.categories {
            let category = Category::from_key(key)
                .ok_or_else(|| Error::Config(format!("unknown category `{key}`")))?;
            let entry = &mut config.categories[category as usize];
            if let Some(w) = over.weight {
                entry.weight = w;
            }
            if let Some(s) = over.scale {
                entry.scale = s;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load and validate an override file.
    pub fn load(path: &Path) -> Result<ScoringConfig> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("loaded scoring config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Default table, or the override file when one is given.
    pub fn resolve(path: Option<&Path>) -> Result<ScoringConfig> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        for c in &self.categories {
            let key = c.category.key();
            if !c.scale.is_finite() || c.scale <= 0.0 {
                return Err(Error::Config(format!(
                    "`{key}` scale must be a positive number, got {}",
                    c.scale
                )));
            }
            if !c.weight.is_finite() || !(0.0..=1.0).contains(&c.weight) {
                return Err(Error::Config(format!(
                    "`{key}` weight must be within [0, 1], got {}",
                    c.weight
                )));
            }
            if c.direction == Direction::Positive && c.weight != 0.0 {
                return Err(Error::Config(format!(
                    "`{key}` is a positive signal and cannot carry a weight"
                )));
            }
        }

        let total: f64 = self.by_direction(Direction::Negative).map(|c| c.weight).sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(Error::Config(format!(
                "negative-signal weights must sum to 1.0, got {total}"
            )));
        }

        for (name, v) in [("bonus_scale", self.bonus_scale), ("bonus_cap", self.bonus_cap)] {
            if !v.is_finite() || v < 0.0 {
                return Err(Error::Config(format!(
                    "`{name}` must be a non-negative number, got {v}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

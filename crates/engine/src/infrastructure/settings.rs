//! Sheet settings loaded from environment variables.
//!
//! Environment I/O stays here; the domain only defines what a
//! [`ProfileOverride`] and [`DisplayLimits`] are. Every variable is optional
//! and an unparseable value falls back to its default with a warning.
//!
//! # Environment Variables
//!
//! - `ONEPAGER_PROFILE` - auto, caster, martial, or hybrid (default: auto)
//! - `ONEPAGER_MAX_SKILLS` - skills shown on the sheet (default: 8)
//! - `ONEPAGER_MAX_FEATS` - feats shown per group (default: unlimited)
//! - `ONEPAGER_MAX_SPELLS_PER_RANK` - spells shown per rank (default: 10)
//! - `ONEPAGER_INCLUDE_PREPARED` - list prepared spells (default: true)
//! - `ONEPAGER_INCLUDE_KNOWN` - list known/spellbook spells (default: false)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use onepager_domain::{DisplayLimits, DomainError, ProfileOverride};

pub const ENV_PROFILE: &str = "ONEPAGER_PROFILE";
pub const ENV_MAX_SKILLS: &str = "ONEPAGER_MAX_SKILLS";
pub const ENV_MAX_FEATS: &str = "ONEPAGER_MAX_FEATS";
pub const ENV_MAX_SPELLS_PER_RANK: &str = "ONEPAGER_MAX_SPELLS_PER_RANK";
pub const ENV_INCLUDE_PREPARED: &str = "ONEPAGER_INCLUDE_PREPARED";
pub const ENV_INCLUDE_KNOWN: &str = "ONEPAGER_INCLUDE_KNOWN";

/// Classification and display options for one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSettings {
    pub profile: ProfileOverride,
    pub limits: DisplayLimits,
    pub include_prepared: bool,
    pub include_known: bool,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            profile: ProfileOverride::Auto,
            limits: DisplayLimits::default(),
            include_prepared: true,
            include_known: false,
        }
    }
}

impl SheetSettings {
    /// Load settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let profile = parse_or(ENV_PROFILE, read(ENV_PROFILE), defaults.profile);
        let include_prepared = read(ENV_INCLUDE_PREPARED)
            .map(|raw| parse_flag(ENV_INCLUDE_PREPARED, &raw, defaults.include_prepared))
            .unwrap_or(defaults.include_prepared);
        let include_known = read(ENV_INCLUDE_KNOWN)
            .map(|raw| parse_flag(ENV_INCLUDE_KNOWN, &raw, defaults.include_known))
            .unwrap_or(defaults.include_known);

        let max_skills = parse_or(
            ENV_MAX_SKILLS,
            read(ENV_MAX_SKILLS),
            defaults.limits.max_skills,
        );
        let max_spells_per_rank = parse_or(
            ENV_MAX_SPELLS_PER_RANK,
            read(ENV_MAX_SPELLS_PER_RANK),
            defaults.limits.max_spells_per_rank,
        );
        let max_feats = read(ENV_MAX_FEATS).and_then(|raw| match raw.parse::<usize>() {
            Ok(cap) => Some(cap),
            Err(_) => {
                tracing::warn!(val = %raw, "{} is not a valid count, ignoring", ENV_MAX_FEATS);
                None
            }
        });

        let limits = match DisplayLimits::new(max_skills, max_feats, max_spells_per_rank) {
            Ok(limits) => limits,
            Err(e) => {
                tracing::warn!(error = %e, "Display limits from environment rejected, using defaults");
                defaults.limits
            }
        };

        Self {
            profile,
            limits,
            include_prepared,
            include_known,
        }
    }

    pub fn with_profile(mut self, profile: ProfileOverride) -> Self {
        self.profile = profile;
        self
    }

    /// Replace the display limits, rejecting zero caps.
    pub fn with_limits(
        mut self,
        max_skills: usize,
        max_feats: Option<usize>,
        max_spells_per_rank: usize,
    ) -> Result<Self, DomainError> {
        self.limits = DisplayLimits::new(max_skills, max_feats, max_spells_per_rank)?;
        Ok(self)
    }

    pub fn with_spell_lists(mut self, include_prepared: bool, include_known: bool) -> Self {
        self.include_prepared = include_prepared;
        self.include_known = include_known;
        self
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(val = %raw, error = %e, "{} is not valid, ignoring", key);
            default
        }
    }
}

fn parse_flag(key: &str, raw: &str, default: bool) -> bool {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!(val = %raw, "{} is not a boolean, ignoring", key);
            default
        }
    }
}

//! Split configuration and per-entity overrides.
//!
//! A [`RevenueSplitConfig`] holds the default rate for each cascade tier.
//! The label-admin and artist rates divide the final pool between them and
//! must sum to 100. [`RateOverrides`] supersedes those two defaults for
//! specific entities.
//!
//! Two input-handling policies coexist, split by boundary:
//!
//! - **Lenient** ([`parse_rate`], [`clamp_rate`],
//!   [`RevenueSplitConfig::sanitized`]): form input is coerced (non-numeric
//!   becomes 0) and clamped to `[0, 100]`, with a warning logged so bad
//!   upstream data stays visible.
//! - **Strict** ([`RevenueSplitConfig::validate`],
//!   [`RateOverrides::validate`]): out-of-range data is rejected with a
//!   typed error. The cascade computation always runs in strict mode.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use waterfall_types::{EntityId, Rate, Tier};

use crate::{Result, SplitError};

/// Default distribution-partner (platform) cut, percent of gross.
pub const DEFAULT_DISTRIBUTION_PARTNER_PCT: Rate = 15.0;

/// Default company-admin cut, percent of the post-distribution remainder.
pub const DEFAULT_COMPANY_ADMIN_PCT: Rate = 10.0;

/// Default label-admin share of the final pool.
pub const DEFAULT_LABEL_ADMIN_PCT: Rate = 20.0;

/// Default artist share of the final pool (complement of the label-admin
/// default).
pub const DEFAULT_ARTIST_PCT: Rate = 80.0;

/// Tolerance for rate-sum comparisons.
pub const RATE_EPSILON: f64 = 1e-6;

/// Default revenue split configuration for a tenant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevenueSplitConfig {
    /// Distribution-partner cut, percent of gross revenue.
    pub distribution_partner_pct: Rate,
    /// Company-admin cut, percent of the post-distribution remainder.
    pub company_admin_pct: Rate,
    /// Label-admin share of the final pool.
    pub label_admin_pct: Rate,
    /// Artist share of the final pool. Must complement `label_admin_pct`.
    pub artist_pct: Rate,
}

/// Platform default split: 15% distribution partner, 10% company admin,
/// 20/80 label admin/artist within the final pool.
pub const DEFAULT_CONFIG: RevenueSplitConfig = RevenueSplitConfig {
    distribution_partner_pct: DEFAULT_DISTRIBUTION_PARTNER_PCT,
    company_admin_pct: DEFAULT_COMPANY_ADMIN_PCT,
    label_admin_pct: DEFAULT_LABEL_ADMIN_PCT,
    artist_pct: DEFAULT_ARTIST_PCT,
};

impl Default for RevenueSplitConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl RevenueSplitConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// - [`SplitError::InvalidPercentage`] if any tier rate is non-finite or
    ///   outside `[0, 100]`
    /// - [`SplitError::ComplementMismatch`] if the label-admin and artist
    ///   rates do not sum to 100
    pub fn validate(&self) -> Result<()> {
        for (tier, value) in self.tier_rates() {
            if !in_range(value) {
                return Err(SplitError::InvalidPercentage { tier, value });
            }
        }
        if (self.label_admin_pct + self.artist_pct - 100.0).abs() > RATE_EPSILON {
            return Err(SplitError::ComplementMismatch {
                label_admin_pct: self.label_admin_pct,
                artist_pct: self.artist_pct,
            });
        }
        Ok(())
    }

    /// Return a clamped copy of this configuration.
    ///
    /// Every tier rate is clamped to `[0, 100]` (non-finite values become 0)
    /// and the artist rate is re-derived as the complement of the clamped
    /// label-admin rate, so the result always passes [`validate`].
    ///
    /// [`validate`]: RevenueSplitConfig::validate
    pub fn sanitized(&self) -> RevenueSplitConfig {
        let label_admin_pct = clamp_rate(self.label_admin_pct);
        RevenueSplitConfig {
            distribution_partner_pct: clamp_rate(self.distribution_partner_pct),
            company_admin_pct: clamp_rate(self.company_admin_pct),
            label_admin_pct,
            artist_pct: 100.0 - label_admin_pct,
        }
    }

    fn tier_rates(&self) -> [(Tier, Rate); 4] {
        [
            (Tier::DistributionPartner, self.distribution_partner_pct),
            (Tier::CompanyAdmin, self.company_admin_pct),
            (Tier::LabelAdmin, self.label_admin_pct),
            (Tier::Artist, self.artist_pct),
        ]
    }
}

/// Per-entity rate overrides for the final pool.
///
/// An entry here supersedes the configured default for that entity only.
/// Lookup is `Option`-based: a stored rate of `0` is a real override, not a
/// fall-through to the default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RateOverrides {
    /// Label-admin overrides, keyed by entity id.
    #[serde(default)]
    pub label_admin: HashMap<EntityId, Rate>,
    /// Artist overrides, keyed by entity id.
    #[serde(default)]
    pub artist: HashMap<EntityId, Rate>,
}

impl RateOverrides {
    /// Validate all override entries.
    ///
    /// # Errors
    ///
    /// - [`SplitError::OverrideOutOfRange`] if any override is non-finite or
    ///   outside `[0, 100]`
    /// - [`SplitError::OverrideSumMismatch`] if an entity carries both a
    ///   label-admin and an artist override and the two do not sum to 100
    pub fn validate(&self) -> Result<()> {
        for (entity, &value) in &self.label_admin {
            if !in_range(value) {
                return Err(SplitError::OverrideOutOfRange {
                    entity: entity.clone(),
                    tier: Tier::LabelAdmin,
                    value,
                });
            }
        }
        for (entity, &value) in &self.artist {
            if !in_range(value) {
                return Err(SplitError::OverrideOutOfRange {
                    entity: entity.clone(),
                    tier: Tier::Artist,
                    value,
                });
            }
        }
        for (entity, &label_pct) in &self.label_admin {
            if let Some(&artist_pct) = self.artist.get(entity) {
                if (label_pct + artist_pct - 100.0).abs() > RATE_EPSILON {
                    return Err(SplitError::OverrideSumMismatch {
                        entity: entity.clone(),
                        label_admin_pct: label_pct,
                        artist_pct,
                    });
                }
            }
        }
        Ok(())
    }

    /// Resolve the effective final-pool rates for an entity.
    ///
    /// Returns `(label_admin_rate, artist_rate)`. An override supersedes the
    /// configured default; whichever rate has no override is derived as the
    /// complement of the other, so the pair always sums to 100.
    ///
    /// Assumes `self` and `config` have already been validated.
    pub fn effective_rates(
        &self,
        config: &RevenueSplitConfig,
        entity: Option<&str>,
    ) -> (Rate, Rate) {
        let label = entity.and_then(|id| self.label_admin.get(id)).copied();
        let artist = entity.and_then(|id| self.artist.get(id)).copied();
        match (label, artist) {
            (Some(l), Some(a)) => (l, a),
            (Some(l), None) => (l, 100.0 - l),
            (None, Some(a)) => (100.0 - a, a),
            (None, None) => (config.label_admin_pct, 100.0 - config.label_admin_pct),
        }
    }
}

/// Clamp a rate to `[0, 100]`.
///
/// Non-finite values become 0. Logs a warning when the value changed, so a
/// caller can detect and correct the upstream data.
pub fn clamp_rate(rate: Rate) -> Rate {
    if !rate.is_finite() {
        tracing::warn!(rate, "non-numeric rate defaulted to 0");
        return 0.0;
    }
    let clamped = rate.clamp(0.0, 100.0);
    if clamped != rate {
        tracing::warn!(rate, clamped, "out-of-range rate clamped");
    }
    clamped
}

/// Coerce raw form input into a rate.
///
/// Non-numeric input becomes 0; numeric input is clamped to `[0, 100]`.
pub fn parse_rate(raw: &str) -> Rate {
    match raw.trim().parse::<f64>() {
        Ok(value) => clamp_rate(value),
        Err(_) => {
            tracing::warn!(raw, "non-numeric rate input defaulted to 0");
            0.0
        }
    }
}

fn in_range(rate: Rate) -> bool {
    rate.is_finite() && (0.0..=100.0).contains(&rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        DEFAULT_CONFIG.validate().expect("default config is valid");
        assert_eq!(DEFAULT_CONFIG.distribution_partner_pct, 15.0);
        assert_eq!(DEFAULT_CONFIG.company_admin_pct, 10.0);
        assert_eq!(
            DEFAULT_CONFIG.label_admin_pct + DEFAULT_CONFIG.artist_pct,
            100.0
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = RevenueSplitConfig {
            distribution_partner_pct: 120.0,
            ..DEFAULT_CONFIG
        };
        assert!(matches!(
            config.validate(),
            Err(SplitError::InvalidPercentage {
                tier: Tier::DistributionPartner,
                ..
            })
        ));

        let config = RevenueSplitConfig {
            company_admin_pct: -5.0,
            ..DEFAULT_CONFIG
        };
        assert!(matches!(
            config.validate(),
            Err(SplitError::InvalidPercentage {
                tier: Tier::CompanyAdmin,
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_complement_mismatch() {
        let config = RevenueSplitConfig {
            label_admin_pct: 30.0,
            artist_pct: 80.0,
            ..DEFAULT_CONFIG
        };
        assert!(matches!(
            config.validate(),
            Err(SplitError::ComplementMismatch { .. })
        ));
    }

    #[test]
    fn test_sanitized_clamps_and_rederives_complement() {
        let config = RevenueSplitConfig {
            distribution_partner_pct: 150.0,
            company_admin_pct: -10.0,
            label_admin_pct: f64::NAN,
            artist_pct: 55.0,
        };
        let clean = config.sanitized();
        assert_eq!(clean.distribution_partner_pct, 100.0);
        assert_eq!(clean.company_admin_pct, 0.0);
        assert_eq!(clean.label_admin_pct, 0.0);
        assert_eq!(clean.artist_pct, 100.0);
        clean.validate().expect("sanitized config is always valid");
    }

    #[test]
    fn test_clamp_rate() {
        assert_eq!(clamp_rate(150.0), 100.0);
        assert_eq!(clamp_rate(-10.0), 0.0);
        assert_eq!(clamp_rate(42.5), 42.5);
        assert_eq!(clamp_rate(f64::NAN), 0.0);
        assert_eq!(clamp_rate(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_parse_rate() {
        assert_eq!(parse_rate("25"), 25.0);
        assert_eq!(parse_rate(" 33.5 "), 33.5);
        assert_eq!(parse_rate("150"), 100.0);
        assert_eq!(parse_rate("-10"), 0.0);
        assert_eq!(parse_rate("abc"), 0.0);
        assert_eq!(parse_rate(""), 0.0);
    }

    #[test]
    fn test_override_validation_accepts_complementary_pair() {
        let mut overrides = RateOverrides::default();
        overrides.label_admin.insert("label_admin_42".into(), 40.0);
        overrides.artist.insert("label_admin_42".into(), 60.0);
        overrides.validate().expect("complementary pair is valid");
    }

    #[test]
    fn test_override_validation_rejects_mismatched_pair() {
        let mut overrides = RateOverrides::default();
        overrides.label_admin.insert("label_admin_42".into(), 40.0);
        overrides.artist.insert("label_admin_42".into(), 50.0);
        assert!(matches!(
            overrides.validate(),
            Err(SplitError::OverrideSumMismatch { .. })
        ));
    }

    #[test]
    fn test_override_validation_rejects_out_of_range() {
        let mut overrides = RateOverrides::default();
        overrides.artist.insert("artist_7".into(), 101.0);
        assert!(matches!(
            overrides.validate(),
            Err(SplitError::OverrideOutOfRange {
                tier: Tier::Artist,
                ..
            })
        ));
    }

    #[test]
    fn test_effective_rates_default_fallback() {
        let overrides = RateOverrides::default();
        let (label, artist) = overrides.effective_rates(&DEFAULT_CONFIG, Some("anyone"));
        assert_eq!(label, DEFAULT_CONFIG.label_admin_pct);
        assert_eq!(artist, DEFAULT_CONFIG.artist_pct);
    }

    #[test]
    fn test_effective_rates_label_override_derives_artist() {
        let mut overrides = RateOverrides::default();
        overrides.label_admin.insert("label_admin_42".into(), 40.0);
        let (label, artist) = overrides.effective_rates(&DEFAULT_CONFIG, Some("label_admin_42"));
        assert_eq!(label, 40.0);
        assert_eq!(artist, 60.0);
        // Other entities keep the defaults.
        let (label, artist) = overrides.effective_rates(&DEFAULT_CONFIG, Some("label_admin_7"));
        assert_eq!(label, DEFAULT_CONFIG.label_admin_pct);
        assert_eq!(artist, DEFAULT_CONFIG.artist_pct);
    }

    #[test]
    fn test_effective_rates_artist_override_derives_label() {
        let mut overrides = RateOverrides::default();
        overrides.artist.insert("artist_7".into(), 90.0);
        let (label, artist) = overrides.effective_rates(&DEFAULT_CONFIG, Some("artist_7"));
        assert_eq!(label, 10.0);
        assert_eq!(artist, 90.0);
    }

    #[test]
    fn test_zero_override_is_honored() {
        // A stored rate of 0 is a real override, not "unset".
        let mut overrides = RateOverrides::default();
        overrides.label_admin.insert("label_admin_0".into(), 0.0);
        let (label, artist) = overrides.effective_rates(&DEFAULT_CONFIG, Some("label_admin_0"));
        assert_eq!(label, 0.0);
        assert_eq!(artist, 100.0);
    }

    #[test]
    fn test_config_json_round_trip() {
        let json = serde_json::to_string(&DEFAULT_CONFIG).expect("serialize");
        let back: RevenueSplitConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, DEFAULT_CONFIG);
    }

    #[test]
    fn test_overrides_deserialize_with_missing_maps() {
        // The REST store may omit empty maps entirely.
        let overrides: RateOverrides = serde_json::from_str("{}").expect("deserialize");
        assert!(overrides.label_admin.is_empty());
        assert!(overrides.artist.is_empty());
    }
}

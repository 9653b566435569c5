//! The ordered cascade computation.
//!
//! Each tier's cut is taken from the pool *remaining* after the previous
//! tier, never from the original gross:
//!
//! ```text
//! distribution_partner = gross * dp_pct / 100
//! remainder            = gross - distribution_partner
//! company_admin        = remainder * ca_pct / 100
//! final_pool           = remainder - company_admin
//! label_admin          = final_pool * label_rate / 100
//! artist               = final_pool - label_admin
//! ```
//!
//! The artist amount is the final-pool remainder rather than a second
//! percentage multiplication, so the four amounts always sum to the gross
//! exactly. Override validation guarantees the remainder form and the
//! artist's effective rate agree.

use serde::{Deserialize, Serialize};
use waterfall_types::{Amount, Tier};

use crate::config::{RateOverrides, RevenueSplitConfig};
use crate::{Result, SplitError};

/// The computed payout for each tier, plus the final-pool intermediate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    /// Distribution-partner payout.
    pub distribution_partner: Amount,
    /// Company-admin payout.
    pub company_admin: Amount,
    /// Label-admin payout.
    pub label_admin: Amount,
    /// Artist payout.
    pub artist: Amount,
    /// Pool remaining after distribution-partner and company-admin cuts,
    /// from which the label-admin and artist payouts were taken.
    pub final_pool: Amount,
}

impl SplitResult {
    /// Sum of the four tier payouts. Equals the gross revenue that produced
    /// this result.
    pub fn total(&self) -> Amount {
        self.distribution_partner + self.company_admin + self.label_admin + self.artist
    }

    /// The payout for a single tier.
    pub fn amount(&self, tier: Tier) -> Amount {
        match tier {
            Tier::DistributionPartner => self.distribution_partner,
            Tier::CompanyAdmin => self.company_admin,
            Tier::LabelAdmin => self.label_admin,
            Tier::Artist => self.artist,
        }
    }
}

/// Compute the cascade split of `gross` for one entity.
///
/// `entity` selects which per-entity overrides apply; `None` (or an entity
/// with no override entry) uses the configured defaults.
///
/// Pure function: identical inputs always produce identical results.
///
/// # Errors
///
/// - [`SplitError::NegativeRevenue`] if `gross` is negative or not a number
/// - any validation error from [`RevenueSplitConfig::validate`] or
///   [`RateOverrides::validate`]
pub fn compute_split(
    gross: Amount,
    config: &RevenueSplitConfig,
    overrides: &RateOverrides,
    entity: Option<&str>,
) -> Result<SplitResult> {
    if !gross.is_finite() || gross < 0.0 {
        return Err(SplitError::NegativeRevenue { amount: gross });
    }
    config.validate()?;
    overrides.validate()?;

    let distribution_partner = gross * (config.distribution_partner_pct / 100.0);
    let remainder = gross - distribution_partner;
    let company_admin = remainder * (config.company_admin_pct / 100.0);
    let final_pool = remainder - company_admin;

    let (label_rate, artist_rate) = overrides.effective_rates(config, entity);
    let label_admin = final_pool * (label_rate / 100.0);
    let artist = final_pool - label_admin;

    tracing::trace!(
        gross,
        final_pool,
        label_rate,
        artist_rate,
        entity = entity.unwrap_or("-"),
        "cascade split computed"
    );

    Ok(SplitResult {
        distribution_partner,
        company_admin,
        label_admin,
        artist,
        final_pool,
    })
}

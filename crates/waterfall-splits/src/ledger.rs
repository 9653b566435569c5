//! Batch split computation over entity rows.
//!
//! The admin dashboards compute a split for every row in a table of artists
//! or label admins, then hand the rows to the persistence API as ledger
//! entries. Rows are independent: each entry is a pure function of its own
//! gross figure plus the shared configuration.

use serde::{Deserialize, Serialize};
use waterfall_types::{Amount, EntityId, Tier, BASE_CURRENCY, TIER_COUNT};

use crate::cascade::{compute_split, SplitResult};
use crate::config::{RateOverrides, RevenueSplitConfig};
use crate::Result;

/// One computed ledger row for an entity, ready for persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The entity the row belongs to.
    pub entity_id: EntityId,
    /// Gross revenue the split was computed from.
    pub gross_revenue: Amount,
    /// Currency of all amounts in this entry.
    pub currency: String,
    /// The computed per-tier payouts.
    pub split: SplitResult,
}

/// Compute a ledger entry for every `(entity, gross)` row.
///
/// Each row uses the overrides for its own entity; rows without an override
/// entry use the configured defaults. Fails on the first invalid input and
/// produces no partial ledger.
///
/// # Errors
///
/// Any error from [`compute_split`] for any row.
pub fn build_ledger(
    rows: &[(EntityId, Amount)],
    config: &RevenueSplitConfig,
    overrides: &RateOverrides,
) -> Result<Vec<LedgerEntry>> {
    let mut entries = Vec::with_capacity(rows.len());
    for (entity_id, gross) in rows {
        let split = compute_split(*gross, config, overrides, Some(entity_id))?;
        entries.push(LedgerEntry {
            entity_id: entity_id.clone(),
            gross_revenue: *gross,
            currency: BASE_CURRENCY.to_string(),
            split,
        });
    }
    tracing::trace!(rows = entries.len(), "ledger built");
    Ok(entries)
}

/// Aggregate per-tier payouts across a ledger, in [`Tier::ALL`] order.
pub fn tier_totals(entries: &[LedgerEntry]) -> [Amount; TIER_COUNT] {
    let mut totals = [0.0; TIER_COUNT];
    for entry in entries {
        for tier in Tier::ALL {
            totals[tier.index()] += entry.split.amount(*tier);
        }
    }
    totals
}

//! # waterfall-splits
//!
//! Cascading revenue-split computation for the Waterfall platform.
//!
//! Gross revenue for a release is distributed through four tiers in fixed
//! order: the distribution partner takes its cut off the gross, the company
//! admin takes its cut off what remains, and the final pool is divided
//! between label admin and artist. Label admins and artists can carry
//! per-entity rate overrides that supersede the configured defaults.
//!
//! Everything here is a pure function of its inputs: no I/O, no shared
//! state. Persistence of configurations and computed ledgers belongs to the
//! calling layer.
//!
//! ## Modules
//!
//! - [`config`] — Split configuration, per-entity overrides, validation and
//!   boundary clamping
//! - [`cascade`] — The ordered cascade computation
//! - [`ledger`] — Batch computation over entity rows and per-tier totals

pub mod cascade;
pub mod config;
pub mod ledger;

use waterfall_types::{Amount, EntityId, Rate, Tier};

/// Error types for split operations.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// A configured tier rate is non-finite or outside `[0, 100]`.
    #[error("{} percentage {value} is outside [0, 100]", .tier.display_name())]
    InvalidPercentage {
        /// The tier the rate belongs to.
        tier: Tier,
        /// The offending value.
        value: Rate,
    },

    /// Label-admin and artist default rates do not sum to 100.
    #[error(
        "label admin ({label_admin_pct}%) and artist ({artist_pct}%) rates must sum to 100"
    )]
    ComplementMismatch {
        /// Configured label-admin rate.
        label_admin_pct: Rate,
        /// Configured artist rate.
        artist_pct: Rate,
    },

    /// Gross revenue is negative (or not a number).
    #[error("gross revenue {amount} has no defined distribution")]
    NegativeRevenue {
        /// The rejected amount.
        amount: Amount,
    },

    /// An entity has both a label-admin and an artist override, and the two
    /// do not sum to 100.
    #[error(
        "overrides for entity {entity} do not sum to 100: label admin {label_admin_pct}%, artist {artist_pct}%"
    )]
    OverrideSumMismatch {
        /// The entity carrying the mismatched pair.
        entity: EntityId,
        /// The label-admin override.
        label_admin_pct: Rate,
        /// The artist override.
        artist_pct: Rate,
    },

    /// A per-entity override rate is non-finite or outside `[0, 100]`.
    #[error(
        "{} override {value} for entity {entity} is outside [0, 100]",
        .tier.display_name()
    )]
    OverrideOutOfRange {
        /// The entity the override belongs to.
        entity: EntityId,
        /// The tier the override applies to.
        tier: Tier,
        /// The offending value.
        value: Rate,
    },
}

/// Convenience result type for split operations.
pub type Result<T> = std::result::Result<T, SplitError>;

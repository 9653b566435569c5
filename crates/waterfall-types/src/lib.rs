//! # waterfall-types
//!
//! Shared domain types used across the Waterfall workspace.
//!
//! Waterfall is the revenue-split core of a multi-tenant music-distribution
//! platform. Gross revenue for a release flows through a fixed cascade of
//! tiers (distribution partner, company admin, label admin, artist); the
//! types here name the participants in that cascade.

pub mod tier;

pub use tier::Tier;

/// Identifier for a label admin or artist, as delivered by the upstream
/// configuration store (a UUID or other opaque string id).
pub type EntityId = String;

/// A percentage rate in `[0, 100]`. Rates may be integers or decimals.
pub type Rate = f64;

/// A revenue amount in the base currency.
pub type Amount = f64;

/// Canonical storage currency for all revenue figures.
///
/// Display-currency conversion and formatting happen outside this core.
pub const BASE_CURRENCY: &str = "GBP";

/// Number of tiers in the cascade.
pub const TIER_COUNT: usize = 4;

//! Cascade tiers.
//!
//! The cascade deducts each tier's share from the pool *remaining* after the
//! previous tier, not from the original gross figure. Order is therefore
//! load-bearing and fixed:
//!
//! 1. Distribution partner (platform cut, off the gross)
//! 2. Company admin (off the post-distribution remainder)
//! 3. Label admin (share of the final pool)
//! 4. Artist (the rest of the final pool)

use serde::{Deserialize, Serialize};

/// A tier in the revenue cascade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    DistributionPartner,
    CompanyAdmin,
    LabelAdmin,
    Artist,
}

impl Tier {
    /// All tiers in cascade order.
    pub const ALL: &'static [Tier] = &[
        Tier::DistributionPartner,
        Tier::CompanyAdmin,
        Tier::LabelAdmin,
        Tier::Artist,
    ];

    /// Human-readable tier name for dashboards and logs.
    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::DistributionPartner => "Distribution Partner",
            Tier::CompanyAdmin => "Company Admin",
            Tier::LabelAdmin => "Label Admin",
            Tier::Artist => "Artist",
        }
    }

    /// Position of this tier in the cascade, starting at 0.
    pub fn index(&self) -> usize {
        match self {
            Tier::DistributionPartner => 0,
            Tier::CompanyAdmin => 1,
            Tier::LabelAdmin => 2,
            Tier::Artist => 3,
        }
    }
}

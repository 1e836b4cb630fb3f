//! Allocation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which classification level the allocation report groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationDimension {
    /// Primary classification only.
    Category,
    /// Secondary classification, falling back to the primary one for
    /// holdings without a secondary label. Limits are keyed at this level.
    #[default]
    Group,
}

/// One classification group and its share of total assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationGroup {
    pub label: String,
    pub market_value: Decimal,
    /// Share of total assets (market value plus cash), in percent.
    pub weight_pct: Decimal,
    /// Configured concentration limit, in percent. `None` when the label
    /// has no limit, in which case the group is never flagged.
    pub limit_pct: Option<Decimal>,
    /// True when the weight has reached the warning share of its limit.
    pub near_limit: bool,
}

/// The full allocation report for one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAllocations {
    pub dimension: AllocationDimension,
    /// Denominator of every weight: open market value plus remaining cash.
    pub total_assets: Decimal,
    pub cash: Decimal,
    pub groups: Vec<AllocationGroup>,
}

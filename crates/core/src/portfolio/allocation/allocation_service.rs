use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::LIMIT_WARNING_RATIO;
use crate::portfolio::allocation::{
    AllocationDimension, AllocationGroup, PortfolioAllocations,
};
use crate::portfolio::holdings::Holding;
use crate::settings::Settings;

/// Groups open positions by classification label and checks each group's
/// weight against its configured concentration limit.
pub struct AllocationService {
    settings: Arc<Settings>,
}

impl AllocationService {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    /// Allocation weights over total assets (market value plus cash).
    ///
    /// Groups appear in ascending limit order; unlimited groups come last.
    /// A group is flagged `near_limit` once its weight reaches the warning
    /// share of its limit; groups without a limit are never flagged.
    pub fn allocations(
        &self,
        holdings: &[Holding],
        cash: Decimal,
        dimension: AllocationDimension,
    ) -> PortfolioAllocations {
        let warning_ratio = Decimal::from_str_radix(LIMIT_WARNING_RATIO, 10)
            .unwrap_or_else(|_| Decimal::new(8, 1));

        let market_value: Decimal = holdings.iter().map(|h| h.market_value).sum();
        let total_assets = market_value + cash;

        // First-appearance order, folded into (label, value) pairs.
        let mut groups: Vec<(String, Decimal)> = Vec::new();
        for holding in holdings {
            let label = match dimension {
                AllocationDimension::Category => holding.category.as_str(),
                AllocationDimension::Group => holding.group_label(),
            };
            match groups.iter_mut().find(|(l, _)| l == label) {
                Some((_, value)) => *value += holding.market_value,
                None => groups.push((label.to_string(), holding.market_value)),
            }
        }

        let mut groups: Vec<AllocationGroup> = groups
            .into_iter()
            .map(|(label, value)| {
                let weight_pct = if total_assets.is_zero() {
                    Decimal::ZERO
                } else {
                    value / total_assets * dec!(100)
                };
                let limit_pct = self.settings.concentration_limit(&label);
                let near_limit = limit_pct
                    .map(|limit| weight_pct >= limit * warning_ratio)
                    .unwrap_or(false);

                AllocationGroup {
                    label,
                    market_value: value,
                    weight_pct,
                    limit_pct,
                    near_limit,
                }
            })
            .collect();

        groups.sort_by(|a, b| match (a.limit_pct, b.limit_pct) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.label.cmp(&b.label),
        });

        PortfolioAllocations {
            dimension,
            total_assets,
            cash,
            groups,
        }
    }
}

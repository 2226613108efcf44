//! Zootechnical and financial metric functions.
//!
//! Everything here is pure arithmetic over already-fetched rows. "Undefined"
//! results (no prior weighing, zero day delta, zero revenue) are `None`, never
//! an error and never a silent zero.

use chrono::NaiveDate;

use crate::entities::{Weighing, WeighingWithMetrics};
use crate::enums::PriceUnit;

/// Target margin percentage a sale must reach for its objective flag.
///
/// Shared by the sale-creation and sale-update paths.
pub const OBJETIVO_MARGEM: f64 = 20.0;

/// Kilograms per arroba (@), the Brazilian cattle-trade unit.
pub const KG_PER_ARROBA: f64 = 15.0;

/// Weight gained since the previous weighing. `None` without a previous weight.
#[must_use]
pub fn gain(current: f64, previous: Option<f64>) -> Option<f64> {
    previous.map(|previous| current - previous)
}

/// Average daily gain (GMD), kg/day. `None` when `days_between` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn gmd(gain: f64, days_between: i64) -> Option<f64> {
    if days_between == 0 {
        return None;
    }
    Some(gain / days_between as f64)
}

/// Calendar days from `earlier` to `later` (negative if reversed).
#[must_use]
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

/// Profit as a percentage of revenue. `None` when revenue is zero.
#[must_use]
pub fn margin_percent(profit: f64, revenue: f64) -> Option<f64> {
    if revenue.abs() < f64::EPSILON {
        return None;
    }
    Some(profit / revenue * 100.0)
}

/// Whether a margin meets the threshold.
#[must_use]
pub fn objective_reached(margin_percent: f64, threshold: f64) -> bool {
    margin_percent >= threshold
}

#[must_use]
pub fn kg_to_arrobas(kg: f64) -> f64 {
    kg / KG_PER_ARROBA
}

/// Gross revenue of a sale for the unit its price is quoted in.
#[must_use]
pub fn sale_revenue(total_weight_kg: f64, head_count: u32, price_per_unit: f64, unit: PriceUnit) -> f64 {
    match unit {
        PriceUnit::Arroba => kg_to_arrobas(total_weight_kg) * price_per_unit,
        PriceUnit::Kg => total_weight_kg * price_per_unit,
        PriceUnit::Head => f64::from(head_count) * price_per_unit,
    }
}

/// Derived financial figures of one sale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaleFigures {
    pub revenue: f64,
    pub gross_profit: f64,
    pub margin_percent: Option<f64>,
    pub objective_reached: bool,
}

impl SaleFigures {
    /// Compute revenue, profit, margin and the objective flag against
    /// [`OBJETIVO_MARGEM`]. An undefined margin never reaches the objective.
    #[must_use]
    pub fn compute(
        total_weight_kg: f64,
        head_count: u32,
        price_per_unit: f64,
        unit: PriceUnit,
        costs: f64,
    ) -> Self {
        let revenue = sale_revenue(total_weight_kg, head_count, price_per_unit, unit);
        let gross_profit = revenue - costs;
        let margin_percent = margin_percent(gross_profit, revenue);
        Self {
            revenue,
            gross_profit,
            margin_percent,
            objective_reached: margin_percent
                .is_some_and(|margin| objective_reached(margin, OBJETIVO_MARGEM)),
        }
    }
}

/// Attach previous-weighing metrics to `current`.
///
/// `previous` must be the latest weighing of the same animal that precedes
/// `current`; callers guarantee this.
#[must_use]
pub fn with_previous(current: &Weighing, previous: Option<&Weighing>) -> WeighingWithMetrics {
    let previous_weight_kg = previous.map(|p| p.weight_kg);
    let previous_date = previous.map(|p| p.date);
    let days = previous_date.map(|date| days_between(date, current.date));
    let gain_kg = gain(current.weight_kg, previous_weight_kg);
    let gmd = match (gain_kg, days) {
        (Some(gain_kg), Some(days)) => gmd(gain_kg, days),
        _ => None,
    };

    WeighingWithMetrics {
        weighing: current.clone(),
        previous_weight_kg,
        previous_date,
        days_between: days,
        gain_kg,
        gmd,
    }
}

/// Derive gain and GMD for every weighing in `weighings`.
///
/// Each weighing is paired with the latest strictly-earlier weighing of the
/// same animal in `(date, created_at)` order. Output preserves input order.
#[must_use]
pub fn derive_weighing_metrics(weighings: &[Weighing]) -> Vec<WeighingWithMetrics> {
    let mut order: Vec<usize> = (0..weighings.len()).collect();
    order.sort_by(|&a, &b| {
        let (wa, wb) = (&weighings[a], &weighings[b]);
        wa.animal_tag
            .cmp(&wb.animal_tag)
            .then(wa.date.cmp(&wb.date))
            .then(wa.created_at.cmp(&wb.created_at))
    });

    let mut previous: Vec<Option<&Weighing>> = vec![None; weighings.len()];
    for pair in order.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        if weighings[prev].animal_tag == weighings[cur].animal_tag {
            previous[cur] = Some(&weighings[prev]);
        }
    }

    weighings
        .iter()
        .zip(previous)
        .map(|(current, previous)| with_previous(current, previous))
        .collect()
}

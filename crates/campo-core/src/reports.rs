//! Typed report summaries produced by the report aggregators in `campo-db`.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ExpenseCategory, LotStatus};
use crate::metrics::{self, OBJETIVO_MARGEM};

/// Optional inclusive date range applied to report procedures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl ReportFilter {
    #[must_use]
    pub const fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }
}

/// Herd ("rebanho") snapshot across all of a user's lots.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HerdSnapshot {
    pub total_lots: u32,
    pub active_lots: u32,
    /// Heads in active lots.
    pub total_heads: u32,
    /// Capacity of active lots that declare one.
    pub total_capacity: u32,
    /// Heads over capacity, counting only lots that declare a capacity.
    pub occupancy_percent: Option<f64>,
    pub last_weighing_date: Option<NaiveDate>,
    /// Mean of each animal's latest weight.
    pub average_weight_kg: Option<f64>,
}

/// First-to-last weighing performance of one animal in the report range.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AnimalPerformance {
    pub animal_tag: String,
    pub lot_id: Option<String>,
    pub weighings: u32,
    pub first_date: NaiveDate,
    pub first_weight_kg: f64,
    pub last_date: NaiveDate,
    pub last_weight_kg: f64,
    pub gain_kg: f64,
    pub gmd: Option<f64>,
}

impl AnimalPerformance {
    /// Build from the first and last weighing of an animal.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_endpoints(
        animal_tag: String,
        lot_id: Option<String>,
        weighings: u32,
        first_date: NaiveDate,
        first_weight_kg: f64,
        last_date: NaiveDate,
        last_weight_kg: f64,
    ) -> Self {
        let gain_kg = last_weight_kg - first_weight_kg;
        let gmd = metrics::gmd(gain_kg, metrics::days_between(first_date, last_date));
        Self {
            animal_tag,
            lot_id,
            weighings,
            first_date,
            first_weight_kg,
            last_date,
            last_weight_kg,
            gain_kg,
            gmd,
        }
    }
}

/// Weighing performance across animals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WeighingPerformance {
    pub animals: Vec<AnimalPerformance>,
    pub animals_weighed: u32,
    pub total_weighings: u32,
    /// Mean GMD over animals with a defined GMD.
    pub average_gmd: Option<f64>,
    pub best_animal: Option<String>,
    pub worst_animal: Option<String>,
}

impl WeighingPerformance {
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn from_animals(animals: Vec<AnimalPerformance>) -> Self {
        let with_gmd: Vec<(&str, f64)> = animals
            .iter()
            .filter_map(|a| a.gmd.map(|gmd| (a.animal_tag.as_str(), gmd)))
            .collect();

        let average_gmd = (!with_gmd.is_empty())
            .then(|| with_gmd.iter().map(|(_, gmd)| gmd).sum::<f64>() / with_gmd.len() as f64);
        let best_animal = with_gmd
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(tag, _)| (*tag).to_string());
        let worst_animal = with_gmd
            .iter()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(tag, _)| (*tag).to_string());

        Self {
            animals_weighed: animals.len() as u32,
            total_weighings: animals.iter().map(|a| a.weighings).sum(),
            average_gmd,
            best_animal,
            worst_animal,
            animals,
        }
    }
}

/// Financial performance of one lot in the report range.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LotPerformance {
    pub lot_id: String,
    pub name: String,
    pub status: LotStatus,
    pub head_count: u32,
    pub heads_sold: u32,
    pub total_expenses: f64,
    pub total_revenue: f64,
    pub total_sale_costs: f64,
    /// Revenue minus sale costs minus lot expenses.
    pub profit: f64,
    pub margin_percent: Option<f64>,
    pub objective_reached: bool,
}

impl LotPerformance {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn compute(
        lot_id: String,
        name: String,
        status: LotStatus,
        head_count: u32,
        heads_sold: u32,
        total_expenses: f64,
        total_revenue: f64,
        total_sale_costs: f64,
    ) -> Self {
        let profit = total_revenue - total_sale_costs - total_expenses;
        let margin_percent = metrics::margin_percent(profit, total_revenue);
        Self {
            lot_id,
            name,
            status,
            head_count,
            heads_sold,
            total_expenses,
            total_revenue,
            total_sale_costs,
            profit,
            margin_percent,
            objective_reached: margin_percent
                .is_some_and(|m| metrics::objective_reached(m, OBJETIVO_MARGEM)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: f64,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MonthTotal {
    /// `YYYY-MM`
    pub month: String,
    pub total: f64,
}

/// Expense totals ("total gasto") by category and by month.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ExpenseSummary {
    pub total: f64,
    pub by_category: Vec<CategoryTotal>,
    pub by_month: Vec<MonthTotal>,
}

impl ExpenseSummary {
    /// Assemble a summary. `total` is the overall expense sum for the range,
    /// queried on its own rather than added up from the breakdowns.
    #[must_use]
    pub const fn from_parts(
        total: f64,
        by_category: Vec<CategoryTotal>,
        by_month: Vec<MonthTotal>,
    ) -> Self {
        Self {
            total,
            by_category,
            by_month,
        }
    }

    #[must_use]
    pub fn category(&self, category: ExpenseCategory) -> Option<&CategoryTotal> {
        self.by_category.iter().find(|c| c.category == category)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}

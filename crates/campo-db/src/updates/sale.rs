//! Sale update builder.
//!
//! Derived figures (revenue, profit, margin, objective flag) are not part of
//! the update; the repo recomputes them from the merged row on every write.

use campo_core::enums::PriceUnit;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SaleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_unit: Option<PriceUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer: Option<Option<String>>,
}

impl SaleUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.head_count.is_none()
            && self.total_weight_kg.is_none()
            && self.price_per_unit.is_none()
            && self.price_unit.is_none()
            && self.costs.is_none()
            && self.buyer.is_none()
    }
}

pub struct SaleUpdateBuilder(SaleUpdate);

impl SaleUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(SaleUpdate::default())
    }

    #[must_use]
    pub const fn date(mut self, date: NaiveDate) -> Self {
        self.0.date = Some(date);
        self
    }

    #[must_use]
    pub const fn head_count(mut self, head_count: u32) -> Self {
        self.0.head_count = Some(head_count);
        self
    }

    #[must_use]
    pub const fn total_weight_kg(mut self, total_weight_kg: f64) -> Self {
        self.0.total_weight_kg = Some(total_weight_kg);
        self
    }

    #[must_use]
    pub const fn price_per_unit(mut self, price_per_unit: f64) -> Self {
        self.0.price_per_unit = Some(price_per_unit);
        self
    }

    #[must_use]
    pub const fn price_unit(mut self, price_unit: PriceUnit) -> Self {
        self.0.price_unit = Some(price_unit);
        self
    }

    #[must_use]
    pub const fn costs(mut self, costs: f64) -> Self {
        self.0.costs = Some(costs);
        self
    }

    #[must_use]
    pub fn buyer(mut self, buyer: Option<String>) -> Self {
        self.0.buyer = Some(buyer);
        self
    }

    #[must_use]
    pub fn build(self) -> SaleUpdate {
        self.0
    }
}

impl Default for SaleUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

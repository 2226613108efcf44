//! Expense update builder.

use campo_core::enums::ExpenseCategory;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExpenseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ExpenseCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub struct ExpenseUpdateBuilder(ExpenseUpdate);

impl ExpenseUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ExpenseUpdate::default())
    }

    #[must_use]
    pub fn lot_id(mut self, lot_id: Option<String>) -> Self {
        self.0.lot_id = Some(lot_id);
        self
    }

    #[must_use]
    pub const fn category(mut self, category: ExpenseCategory) -> Self {
        self.0.category = Some(category);
        self
    }

    #[must_use]
    pub const fn amount(mut self, amount: f64) -> Self {
        self.0.amount = Some(amount);
        self
    }

    #[must_use]
    pub const fn date(mut self, date: NaiveDate) -> Self {
        self.0.date = Some(date);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn build(self) -> ExpenseUpdate {
        self.0
    }
}

impl Default for ExpenseUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::PriceUnit;

/// A sale of animals from a lot.
///
/// `revenue`, `gross_profit`, `margin_percent` and `objective_reached` are
/// derived from the inputs on every write and persisted with the row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Sale {
    pub id: String,
    pub user_id: String,
    pub lot_id: String,
    pub date: NaiveDate,
    pub head_count: u32,
    pub total_weight_kg: f64,
    pub price_per_unit: f64,
    pub price_unit: PriceUnit,
    pub costs: f64,
    pub buyer: Option<String>,
    pub revenue: f64,
    pub gross_profit: f64,
    pub margin_percent: Option<f64>,
    pub objective_reached: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sale {
    /// Average live weight per head sold.
    #[must_use]
    pub fn average_weight_kg(&self) -> Option<f64> {
        (self.head_count > 0).then(|| self.total_weight_kg / f64::from(self.head_count))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NewSale {
    pub lot_id: String,
    pub date: NaiveDate,
    pub head_count: u32,
    pub total_weight_kg: f64,
    pub price_per_unit: f64,
    #[serde(default)]
    pub price_unit: PriceUnit,
    pub costs: f64,
    #[serde(default)]
    pub buyer: Option<String>,
}

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single weight measurement of one animal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Weighing {
    pub id: String,
    pub user_id: String,
    /// Ear tag identifying the animal.
    pub animal_tag: String,
    pub lot_id: Option<String>,
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A weighing with the fields derived from the animal's previous weighing.
///
/// `gain_kg` is present whenever a prior weighing exists; `gmd` additionally
/// requires a non-zero day delta.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WeighingWithMetrics {
    #[serde(flatten)]
    pub weighing: Weighing,
    pub previous_weight_kg: Option<f64>,
    pub previous_date: Option<NaiveDate>,
    pub days_between: Option<i64>,
    pub gain_kg: Option<f64>,
    /// Ganho médio diário, kg/day.
    pub gmd: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NewWeighing {
    pub animal_tag: String,
    #[serde(default)]
    pub lot_id: Option<String>,
    pub date: NaiveDate,
    pub weight_kg: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

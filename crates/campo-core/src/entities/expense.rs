use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ExpenseCategory;

/// Money spent on the operation, optionally attributed to a lot.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub lot_id: Option<String>,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NewExpense {
    #[serde(default)]
    pub lot_id: Option<String>,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
}

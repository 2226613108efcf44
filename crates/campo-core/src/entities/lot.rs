use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::LotStatus;

/// A managed cohort of cattle tracked together.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Lot {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub entry_date: NaiveDate,
    pub head_count: u32,
    pub capacity: Option<u32>,
    pub status: LotStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lot {
    /// Head count as a percentage of capacity, when capacity is known and non-zero.
    #[must_use]
    pub fn occupancy_percent(&self) -> Option<f64> {
        match self.capacity {
            Some(capacity) if capacity > 0 => {
                Some(f64::from(self.head_count) / f64::from(capacity) * 100.0)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewLot {
    pub name: String,
    pub entry_date: NaiveDate,
    pub head_count: u32,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

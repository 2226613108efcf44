//! Weighing update builder.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct WeighingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animal_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

pub struct WeighingUpdateBuilder(WeighingUpdate);

impl WeighingUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(WeighingUpdate::default())
    }

    #[must_use]
    pub fn animal_tag(mut self, animal_tag: impl Into<String>) -> Self {
        self.0.animal_tag = Some(animal_tag.into());
        self
    }

    #[must_use]
    pub fn lot_id(mut self, lot_id: Option<String>) -> Self {
        self.0.lot_id = Some(lot_id);
        self
    }

    #[must_use]
    pub const fn date(mut self, date: NaiveDate) -> Self {
        self.0.date = Some(date);
        self
    }

    #[must_use]
    pub const fn weight_kg(mut self, weight_kg: f64) -> Self {
        self.0.weight_kg = Some(weight_kg);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.0.notes = Some(notes);
        self
    }

    #[must_use]
    pub fn build(self) -> WeighingUpdate {
        self.0
    }
}

impl Default for WeighingUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

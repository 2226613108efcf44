//! Lot update builder.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct LotUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

pub struct LotUpdateBuilder(LotUpdate);

impl LotUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(LotUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn entry_date(mut self, entry_date: NaiveDate) -> Self {
        self.0.entry_date = Some(entry_date);
        self
    }

    #[must_use]
    pub const fn head_count(mut self, head_count: u32) -> Self {
        self.0.head_count = Some(head_count);
        self
    }

    #[must_use]
    pub const fn capacity(mut self, capacity: Option<u32>) -> Self {
        self.0.capacity = Some(capacity);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.0.notes = Some(notes);
        self
    }

    #[must_use]
    pub fn build(self) -> LotUpdate {
        self.0
    }
}

impl Default for LotUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

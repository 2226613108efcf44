//! Status and category enums for Campo.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! which is also the form stored in SQL. Status enums with state machines provide
//! `allowed_next_states()` to enforce valid transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// LotStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a lot. Lots are never hard-deleted; archiving is the delete.
///
/// ```text
/// active → closed → archived
///        → archived
/// closed → active (reopened)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LotStatus {
    Active,
    Closed,
    Archived,
}

impl LotStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Active => &[Self::Closed, Self::Archived],
            Self::Closed => &[Self::Active, Self::Archived],
            Self::Archived => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for LotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ExpenseCategory
// ---------------------------------------------------------------------------

/// Category of a farm expense, used for the per-category report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Feed,
    Health,
    Labor,
    Maintenance,
    Fuel,
    AnimalPurchase,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [Self; 7] = [
        Self::Feed,
        Self::Health,
        Self::Labor,
        Self::Maintenance,
        Self::Fuel,
        Self::AnimalPurchase,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Health => "health",
            Self::Labor => "labor",
            Self::Maintenance => "maintenance",
            Self::Fuel => "fuel",
            Self::AnimalPurchase => "animal_purchase",
            Self::Other => "other",
        }
    }

    /// Label shown to pt-BR users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Feed => "Alimentação",
            Self::Health => "Sanidade",
            Self::Labor => "Mão de obra",
            Self::Maintenance => "Manutenção",
            Self::Fuel => "Combustível",
            Self::AnimalPurchase => "Compra de animais",
            Self::Other => "Outros",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PriceUnit
// ---------------------------------------------------------------------------

/// Unit a sale price is quoted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    /// Price per arroba (15 kg), the usual quote for finished cattle.
    #[default]
    Arroba,
    Kg,
    Head,
}

impl PriceUnit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arroba => "arroba",
            Self::Kg => "kg",
            Self::Head => "head",
        }
    }
}

impl fmt::Display for PriceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TaskCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Health,
    Feeding,
    Weighing,
    Maintenance,
    Financial,
    Other,
}

impl TaskCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Feeding => "feeding",
            Self::Weighing => "weighing",
            Self::Maintenance => "maintenance",
            Self::Financial => "financial",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task.
///
/// ```text
/// pending ⇄ completed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Completed],
            Self::Completed => &[Self::Pending],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

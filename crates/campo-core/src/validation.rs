//! Advisory field validation run before remote writes.
//!
//! These checks give the user an early, readable message. The store's own
//! constraints remain the authority; passing here does not guarantee the
//! write succeeds.

use chrono::NaiveDate;

use crate::entities::{NewExpense, NewLot, NewSale, NewTask, NewWeighing};
use crate::errors::CoreError;

/// Input that can be checked before it is written.
pub trait Validate {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` with a user-facing message for the first
    /// failing field.
    fn validate(&self) -> Result<(), CoreError>;
}

/// # Errors
///
/// Fails when `value` is empty or whitespace.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(format!("Field '{field}' is required")));
    }
    Ok(())
}

/// # Errors
///
/// Fails unless `value` is finite and greater than zero.
pub fn require_positive(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::validation(format!(
            "Field '{field}' must be a positive number"
        )));
    }
    Ok(())
}

/// # Errors
///
/// Fails unless `value` is finite and not negative.
pub fn require_non_negative(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::validation(format!(
            "Field '{field}' must not be negative"
        )));
    }
    Ok(())
}

/// # Errors
///
/// Fails when `value` is zero.
pub fn require_positive_count(field: &str, value: u32) -> Result<(), CoreError> {
    if value == 0 {
        return Err(CoreError::validation(format!(
            "Field '{field}' must be greater than zero"
        )));
    }
    Ok(())
}

/// Check an optional `[start, end]` report range.
///
/// # Errors
///
/// Fails when both bounds are set and `start` is after `end`.
pub fn validate_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), CoreError> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => Err(CoreError::validation(format!(
            "Start date {start} is after end date {end}"
        ))),
        _ => Ok(()),
    }
}

/// Check a lot's head count against its capacity.
///
/// # Errors
///
/// Fails when the capacity is zero or smaller than the head count.
pub fn validate_capacity(head_count: u32, capacity: Option<u32>) -> Result<(), CoreError> {
    if let Some(capacity) = capacity {
        require_positive_count("capacity", capacity)?;
        if head_count > capacity {
            return Err(CoreError::validation(format!(
                "Head count {head_count} exceeds lot capacity {capacity}"
            )));
        }
    }
    Ok(())
}

impl Validate for NewLot {
    fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("name", &self.name)?;
        require_positive_count("head_count", self.head_count)?;
        validate_capacity(self.head_count, self.capacity)
    }
}

impl Validate for NewWeighing {
    fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("animal_tag", &self.animal_tag)?;
        require_positive("weight_kg", self.weight_kg)
    }
}

impl Validate for NewExpense {
    fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("description", &self.description)?;
        require_positive("amount", self.amount)
    }
}

impl Validate for NewSale {
    fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("lot_id", &self.lot_id)?;
        require_positive_count("head_count", self.head_count)?;
        require_positive("total_weight_kg", self.total_weight_kg)?;
        require_positive("price_per_unit", self.price_per_unit)?;
        require_non_negative("costs", self.costs)
    }
}

impl Validate for NewTask {
    fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("title", &self.title)
    }
}

//! # campo-core
//!
//! Core types, metric functions, and error types for Campo.
//!
//! This crate provides the foundational types shared across all Campo crates:
//! - Entity structs for every farm record (lots, weighings, expenses, sales, tasks)
//! - Category and status enums
//! - ID prefix constants
//! - Zootechnical and financial metric functions (gain, GMD, margin)
//! - pt-BR / BRL formatting helpers
//! - Advisory field validation
//! - Typed report summaries
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod format;
pub mod identity;
pub mod ids;
pub mod metrics;
pub mod reports;
pub mod validation;

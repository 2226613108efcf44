//! Update builder types for record mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some` fields
//! generate SET clauses in the dynamic UPDATE SQL. `Option<Option<T>>` fields
//! distinguish "leave unchanged" (`None`) from "clear" (`Some(None)`).

pub mod expense;
pub mod lot;
pub mod sale;
pub mod task;
pub mod weighing;

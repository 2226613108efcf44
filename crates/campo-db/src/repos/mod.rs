//! Record services for every Campo entity.
//!
//! Each module adds methods to `CampoService` via `impl CampoService` blocks.

pub mod expense;
pub mod lot;
pub mod sale;
pub mod task;
pub mod weighing;

//! Entity structs for every Campo record.
//!
//! Each entity maps to a table in the remote libSQL store (see
//! `campo-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.
//!
//! `New*` structs are the write-side inputs accepted by the record services;
//! ids, owners and timestamps are assigned by the service.

mod expense;
mod lot;
mod sale;
mod task;
mod weighing;

pub use expense::{Expense, NewExpense};
pub use lot::{Lot, NewLot};
pub use sale::{NewSale, Sale};
pub use task::{NewTask, Task};
pub use weighing::{NewWeighing, Weighing, WeighingWithMetrics};

mod expense;
mod lot;
mod report;
mod sale;
mod task;
mod weighing;

pub use expense::{ExpenseCommands, ExpenseCreateArgs, ExpenseUpdateArgs};
pub use lot::{LotCommands, LotCreateArgs, LotUpdateArgs};
pub use report::{RangeArgs, ReportCommands};
pub use sale::{SaleCommands, SaleCreateArgs, SaleUpdateArgs};
pub use task::{TaskCommands, TaskCreateArgs, TaskUpdateArgs};
pub use weighing::{WeighingCommands, WeighingCreateArgs, WeighingUpdateArgs};

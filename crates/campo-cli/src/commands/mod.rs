pub mod dispatch;
pub mod expense;
pub mod lot;
pub mod report;
pub mod sale;
pub mod serve;
pub mod shared;
pub mod task;
pub mod weighing;

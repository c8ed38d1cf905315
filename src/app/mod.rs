// Application layer: what the user sees (reports, static content) and batch runs.

pub mod batch;
pub mod content;
pub mod report;

pub use batch::{screen_csv, BatchRow, BatchSummary};
pub use report::{ErrorKind, Outcome, Report};

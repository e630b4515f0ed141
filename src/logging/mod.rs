//! Routine progress logging: console output, a per-command log file, and
//! the end-of-run summary.

mod logger;
mod subscriber;
mod types;

pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::{Log, RoutineRecord, RoutineStatus};

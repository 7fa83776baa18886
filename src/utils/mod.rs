// Utils compartidos

pub mod constants;
pub mod dates;
pub mod scheduler;
pub mod storage;

pub use constants::*;
pub use dates::{format_fecha, now_ms};
pub use scheduler::{Scheduler, TimeoutScheduler};
pub use storage::{BrowserStore, KeyValueStore, MemoryStore};

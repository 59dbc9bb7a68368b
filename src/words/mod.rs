//! Word statistics and adaptive selection
//!
//! Nothing in here touches the DOM:
//! - `record`: per-word statistics and the attempt update rule
//! - `store`: the persisted collection
//! - `selector`: weighted random choice of the next word

pub mod defaults;
pub mod record;
pub mod selector;
pub mod store;

pub use defaults::STARTER_WORDS;
pub use record::{WordRecord, normalize};
pub use selector::choose;
pub use store::{SnapshotError, WordStore, parse_snapshot, starter_records};

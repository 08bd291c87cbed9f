//! Domain types shared by the registry, the resolvers and the session

mod entry;
mod record;

pub use entry::{EntryDetail, EntryUpdate, IndexEntry};
pub use record::{BattleRecord, CaptureOutcome, EncounterRecord};

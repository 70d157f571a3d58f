use anyhow::Result;

use crate::model::day_log::DayLog;
use crate::model::diary::DiaryEntry;
use crate::model::mood::MoodEntry;

/// Persistence behind the journal: two independent stores, one per kind.
/// Loading a store that was never saved yields an empty log, not an
/// error. Saves are full-snapshot overwrites of the whole mapping.
pub trait JournalRepository {
    fn load_moods(&self) -> Result<DayLog<MoodEntry>>;
    fn save_moods(&self, log: &DayLog<MoodEntry>) -> Result<()>;
    fn load_diary(&self) -> Result<DayLog<DiaryEntry>>;
    fn save_diary(&self, log: &DayLog<DiaryEntry>) -> Result<()>;
}

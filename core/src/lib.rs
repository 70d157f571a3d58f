pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod view;

pub use model::day_log::DayLog;
pub use model::diary::DiaryEntry;
pub use model::mood::{Mood, MoodEntry};
pub use repository::{FileJournalRepository, JournalRepository};
pub use service::journal::{Journal, JournalError};
pub use time::{clock_time, day_key, parse_day_key};
pub use view::{build_view, DaySection, EntryRow, RowImage, RowSource};

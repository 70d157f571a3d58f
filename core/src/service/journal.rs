use anyhow::{anyhow, Result};
use chrono::{DateTime, Local};
use thiserror::Error;

use crate::model::day_log::DayLog;
use crate::model::diary::DiaryEntry;
use crate::model::mood::{Mood, MoodEntry};
use crate::repository::JournalRepository;
use crate::time::{clock_time, day_key};

/// The one validated failure the journal knows about. Everything else
/// (IO, serialization) propagates as a plain `anyhow::Error`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JournalError {
    #[error("entry text is empty")]
    EmptyInput,
}

/// The entry store: both in-memory logs plus the repository they mirror
/// to. Every mutation persists the full affected log before returning,
/// so the in-memory state and the snapshot on disk never diverge.
pub struct Journal<R: JournalRepository> {
    repo: R,
    moods: DayLog<MoodEntry>,
    diary: DayLog<DiaryEntry>,
}

impl<R: JournalRepository> Journal<R> {
    /// Loads both logs from the repository; stores that were never
    /// saved come back empty.
    pub fn open(repo: R) -> Result<Self> {
        let moods = repo.load_moods()?;
        let diary = repo.load_diary()?;
        Ok(Self { repo, moods, diary })
    }

    pub fn moods(&self) -> &DayLog<MoodEntry> {
        &self.moods
    }

    pub fn diary(&self) -> &DayLog<DiaryEntry> {
        &self.diary
    }

    /// Records a mood under today's day-key and persists the mood log.
    pub fn add_mood(&mut self, mood: &Mood) -> Result<()> {
        self.add_mood_at(mood, Local::now())
    }

    /// Records a diary entry under today's day-key and persists the
    /// diary log. Input is trimmed first; empty text aborts with
    /// `JournalError::EmptyInput` before any state or disk change.
    pub fn add_diary(&mut self, text: &str) -> Result<()> {
        self.add_diary_at(text, Local::now())
    }

    /// Removes the mood entry at `index` within `day_key`. Both come
    /// from the current render, so a miss here is a caller bug.
    pub fn delete_mood(&mut self, day_key: &str, index: usize) -> Result<()> {
        self.moods
            .remove(day_key, index)
            .ok_or_else(|| anyhow!("No mood entry at index {} for {}", index, day_key))?;
        self.repo.save_moods(&self.moods)
    }

    pub fn delete_diary(&mut self, day_key: &str, index: usize) -> Result<()> {
        self.diary
            .remove(day_key, index)
            .ok_or_else(|| anyhow!("No diary entry at index {} for {}", index, day_key))?;
        self.repo.save_diary(&self.diary)
    }

    fn add_mood_at(&mut self, mood: &Mood, now: DateTime<Local>) -> Result<()> {
        let key = day_key(now.date_naive());
        self.moods.append(key, MoodEntry::new(mood, clock_time(&now)));
        self.repo.save_moods(&self.moods)
    }

    fn add_diary_at(&mut self, text: &str, now: DateTime<Local>) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(JournalError::EmptyInput.into());
        }
        let key = day_key(now.date_naive());
        self.diary
            .append(key, DiaryEntry::new(text.to_string(), clock_time(&now)));
        self.repo.save_diary(&self.diary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct StoreState {
        moods: DayLog<MoodEntry>,
        diary: DayLog<DiaryEntry>,
        mood_saves: usize,
        diary_saves: usize,
    }

    /// In-memory stand-in for the file repository; counts save calls so
    /// tests can assert that aborted operations never touch persistence.
    #[derive(Default, Clone)]
    struct MemoryRepository {
        state: Rc<RefCell<StoreState>>,
    }

    impl JournalRepository for MemoryRepository {
        fn load_moods(&self) -> Result<DayLog<MoodEntry>> {
            Ok(self.state.borrow().moods.clone())
        }

        fn save_moods(&self, log: &DayLog<MoodEntry>) -> Result<()> {
            let mut state = self.state.borrow_mut();
            state.moods = log.clone();
            state.mood_saves += 1;
            Ok(())
        }

        fn load_diary(&self) -> Result<DayLog<DiaryEntry>> {
            Ok(self.state.borrow().diary.clone())
        }

        fn save_diary(&self, log: &DayLog<DiaryEntry>) -> Result<()> {
            let mut state = self.state.borrow_mut();
            state.diary = log.clone();
            state.diary_saves += 1;
            Ok(())
        }
    }

    fn happy() -> Mood {
        Mood::new("Happy", "images/happy.png", "Happy face")
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn moods_group_by_day_and_keep_call_order() {
        let repo = MemoryRepository::default();
        let mut journal = Journal::open(repo).unwrap();

        journal.add_mood_at(&happy(), at(2026, 8, 30, 9, 5)).unwrap();
        journal
            .add_mood_at(&Mood::new("Tired", "images/tired.png", "Tired face"), at(2026, 8, 30, 22, 40))
            .unwrap();
        journal.add_mood_at(&happy(), at(2026, 8, 31, 8, 0)).unwrap();

        let moods = journal.moods();
        assert_eq!(moods.day_count(), 2);
        let today = moods.get("August 30, 2026").unwrap();
        assert_eq!(today.len(), 2);
        assert_eq!(today[0].mood, "Happy");
        assert_eq!(today[0].time, "9:05 AM");
        assert_eq!(today[1].mood, "Tired");
        assert_eq!(today[1].time, "10:40 PM");
        assert_eq!(moods.get("August 31, 2026").unwrap().len(), 1);
    }

    #[test]
    fn recorded_mood_carries_the_palette_image() {
        let repo = MemoryRepository::default();
        let mut journal = Journal::open(repo).unwrap();

        journal.add_mood_at(&happy(), at(2026, 8, 30, 9, 5)).unwrap();

        let entry = &journal.moods().get("August 30, 2026").unwrap()[0];
        assert_eq!(entry.image_ref, "images/happy.png");
        assert_eq!(entry.image_alt, "Happy face");
    }

    #[test]
    fn empty_diary_input_is_rejected_without_persisting() {
        let repo = MemoryRepository::default();
        let mut journal = Journal::open(repo.clone()).unwrap();

        for input in ["", "   ", "\n\t "] {
            let err = journal.add_diary(input).unwrap_err();
            assert_eq!(
                err.downcast_ref::<JournalError>(),
                Some(&JournalError::EmptyInput)
            );
        }

        assert!(journal.diary().is_empty());
        assert_eq!(repo.state.borrow().diary_saves, 0);
    }

    #[test]
    fn diary_text_is_trimmed_before_recording() {
        let repo = MemoryRepository::default();
        let mut journal = Journal::open(repo.clone()).unwrap();

        journal.add_diary_at("  hi  ", at(2026, 8, 30, 9, 5)).unwrap();

        let today = journal.diary().get("August 30, 2026").unwrap();
        assert_eq!(today[0].text, "hi");
        assert_eq!(repo.state.borrow().diary_saves, 1);
    }

    #[test]
    fn deleting_the_only_entry_removes_the_day() {
        let repo = MemoryRepository::default();
        let mut journal = Journal::open(repo.clone()).unwrap();

        journal.add_mood_at(&happy(), at(2026, 8, 30, 9, 5)).unwrap();
        journal.delete_mood("August 30, 2026", 0).unwrap();

        assert!(journal.moods().is_empty());
        // The eviction was persisted too.
        assert!(repo.state.borrow().moods.is_empty());
    }

    #[test]
    fn deleting_a_middle_entry_keeps_the_rest_in_order() {
        let repo = MemoryRepository::default();
        let mut journal = Journal::open(repo).unwrap();

        for text in ["one", "two", "three"] {
            journal.add_diary_at(text, at(2026, 8, 30, 9, 5)).unwrap();
        }
        journal.delete_diary("August 30, 2026", 1).unwrap();

        let today = journal.diary().get("August 30, 2026").unwrap();
        let texts: Vec<&str> = today.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "three"]);
    }

    #[test]
    fn delete_with_a_stale_address_is_an_error() {
        let repo = MemoryRepository::default();
        let mut journal = Journal::open(repo.clone()).unwrap();

        journal.add_mood_at(&happy(), at(2026, 8, 30, 9, 5)).unwrap();
        let saves_before = repo.state.borrow().mood_saves;

        assert!(journal.delete_mood("August 30, 2026", 5).is_err());
        assert!(journal.delete_mood("January 1, 2020", 0).is_err());
        assert_eq!(journal.moods().entry_count(), 1);
        assert_eq!(repo.state.borrow().mood_saves, saves_before);
    }

    #[test]
    fn open_picks_up_previously_saved_logs() {
        let repo = MemoryRepository::default();
        {
            let mut journal = Journal::open(repo.clone()).unwrap();
            journal.add_mood_at(&happy(), at(2026, 8, 30, 9, 5)).unwrap();
            journal.add_diary_at("long walk", at(2026, 8, 30, 19, 0)).unwrap();
        }

        let reopened = Journal::open(repo).unwrap();
        assert_eq!(reopened.moods().entry_count(), 1);
        assert_eq!(reopened.diary().entry_count(), 1);
    }
}

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::day_log::DayLog;
use crate::model::diary::DiaryEntry;
use crate::model::mood::MoodEntry;
use crate::repository::traits::JournalRepository;

// File names double as the store keys; one blob per store.
const MOOD_FILE_NAME: &str = "moodEntries.json";
const DIARY_FILE_NAME: &str = "diaryEntries.json";

#[derive(Clone)]
pub struct FileJournalRepository {
    base_dir: PathBuf,
}

impl FileJournalRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".moodlog")
            }
        };
        fs::create_dir_all(&path)?;

        Ok(FileJournalRepository { base_dir: path })
    }

    fn read_log<T: DeserializeOwned>(&self, file_name: &str) -> Result<DayLog<T>> {
        let path = self.base_dir.join(file_name);
        if !path.exists() {
            // Nothing persisted yet: an empty log, not an error.
            return Ok(DayLog::new());
        }
        let file = File::open(&path)?;
        let reader = BufReader::new(file);
        let log = serde_json::from_reader(reader)?;
        Ok(log)
    }

    fn write_log<T: Serialize>(&self, file_name: &str, log: &DayLog<T>) -> Result<()> {
        let file = File::create(self.base_dir.join(file_name))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, log)?;
        writer.flush()?;
        Ok(())
    }
}

impl JournalRepository for FileJournalRepository {
    fn load_moods(&self) -> Result<DayLog<MoodEntry>> {
        self.read_log(MOOD_FILE_NAME)
    }

    fn save_moods(&self, log: &DayLog<MoodEntry>) -> Result<()> {
        self.write_log(MOOD_FILE_NAME, log)
    }

    fn load_diary(&self) -> Result<DayLog<DiaryEntry>> {
        self.read_log(DIARY_FILE_NAME)
    }

    fn save_diary(&self, log: &DayLog<DiaryEntry>) -> Result<()> {
        self.write_log(DIARY_FILE_NAME, log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mood::Mood;
    use tempfile::tempdir;

    fn entry(label: &str, time: &str) -> MoodEntry {
        let mood = Mood::new(
            label,
            &format!("images/{}.png", label.to_lowercase()),
            &format!("{} face", label),
        );
        MoodEntry::new(&mood, time.to_string())
    }

    #[test]
    fn missing_files_load_as_empty_logs() {
        let dir = tempdir().unwrap();
        let repo = FileJournalRepository::new(Some(dir.path().to_path_buf())).unwrap();

        assert!(repo.load_moods().unwrap().is_empty());
        assert!(repo.load_diary().unwrap().is_empty());
    }

    #[test]
    fn save_then_reload_reproduces_the_mapping() {
        let dir = tempdir().unwrap();
        let repo = FileJournalRepository::new(Some(dir.path().to_path_buf())).unwrap();

        let mut moods = DayLog::new();
        moods.append("August 30, 2026", entry("Happy", "9:05 AM"));
        moods.append("August 30, 2026", entry("Tired", "10:42 PM"));
        moods.append("July 4, 2026", entry("Excited", "1:00 PM"));

        let mut diary = DayLog::new();
        diary.append(
            "August 30, 2026",
            DiaryEntry::new("slept well".to_string(), "8:15 AM".to_string()),
        );

        repo.save_moods(&moods).unwrap();
        repo.save_diary(&diary).unwrap();

        // A fresh repository simulates a restart.
        let reopened = FileJournalRepository::new(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(reopened.load_moods().unwrap(), moods);
        assert_eq!(reopened.load_diary().unwrap(), diary);
    }

    #[test]
    fn save_overwrites_the_previous_snapshot() {
        let dir = tempdir().unwrap();
        let repo = FileJournalRepository::new(Some(dir.path().to_path_buf())).unwrap();

        let mut moods = DayLog::new();
        moods.append("August 30, 2026", entry("Happy", "9:05 AM"));
        repo.save_moods(&moods).unwrap();

        moods.remove("August 30, 2026", 0);
        repo.save_moods(&moods).unwrap();

        assert!(repo.load_moods().unwrap().is_empty());
    }
}

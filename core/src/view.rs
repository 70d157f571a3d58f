use crate::model::day_log::DayLog;
use crate::model::diary::DiaryEntry;
use crate::model::mood::MoodEntry;

/// Image attached to a rendered row (mood rows only).
#[derive(Debug, Clone, PartialEq)]
pub struct RowImage {
    pub src: String,
    pub alt: String,
}

/// One visible entry. `day_key` and `index` together are the delete
/// address for this exact row; `index` is the entry's position within
/// its day as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRow {
    pub day_key: String,
    pub index: usize,
    pub time: String,
    pub text: String,
    pub image: Option<RowImage>,
}

impl EntryRow {
    /// The standard presentation of a row: time, then body.
    pub fn display_line(&self) -> String {
        format!("{} — {}", self.time, self.text)
    }
}

/// A titled group of rows for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySection {
    pub title: String,
    pub rows: Vec<EntryRow>,
}

/// How an entry kind maps onto a row. Keeps `build_view` generic over
/// the two logs without the presentation layer knowing either type.
pub trait RowSource {
    fn time(&self) -> &str;
    fn text(&self) -> &str;
    fn image(&self) -> Option<RowImage> {
        None
    }
}

impl RowSource for MoodEntry {
    fn time(&self) -> &str {
        &self.time
    }

    fn text(&self) -> &str {
        &self.mood
    }

    fn image(&self) -> Option<RowImage> {
        Some(RowImage {
            src: self.image_ref.clone(),
            alt: self.image_alt.clone(),
        })
    }
}

impl RowSource for DiaryEntry {
    fn time(&self) -> &str {
        &self.time
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// Builds the complete view-model for one log: sections in descending
/// day order, rows in stored (oldest-first) order. Pure over the log,
/// so callers rebuild from scratch after every mutation and can never
/// hold a stale row.
pub fn build_view<T: RowSource>(log: &DayLog<T>) -> Vec<DaySection> {
    log.day_keys_desc()
        .into_iter()
        .map(|key| {
            let rows = log
                .get(key)
                .unwrap_or(&[])
                .iter()
                .enumerate()
                .map(|(index, entry)| EntryRow {
                    day_key: key.to_string(),
                    index,
                    time: entry.time().to_string(),
                    text: entry.text().to_string(),
                    image: entry.image(),
                })
                .collect();
            DaySection {
                title: key.to_string(),
                rows,
            }
        })
        .collect()
}

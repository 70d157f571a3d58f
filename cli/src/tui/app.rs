use anyhow::Result;
use ratatui::widgets::ListState;

use moodlog_core::{build_view, DaySection, FileJournalRepository, Journal, JournalError, Mood};

use crate::palette;

/// How many palette moods the carousel strip shows at once; movement is
/// one step per keypress.
pub const CAROUSEL_WINDOW: usize = 5;

#[derive(Clone, Copy, PartialEq)]
pub enum Tab {
    Moods,
    Diary,
}

#[derive(Clone, Copy, PartialEq)]
pub enum Mode {
    Browse,
    DiaryInput,
    ConfirmDelete,
}

/// One line of a rendered history list. Day headers are visible but the
/// selection skips them; entry lines carry their delete address.
pub enum HistoryLine {
    DayHeader(String),
    Entry {
        day_key: String,
        index: usize,
        text: String,
    },
}

pub struct HistoryList {
    pub lines: Vec<HistoryLine>,
    pub state: ListState,
}

impl HistoryList {
    fn from_sections(sections: Vec<DaySection>) -> Self {
        let mut lines = Vec::new();
        for section in sections {
            lines.push(HistoryLine::DayHeader(section.title.clone()));
            for row in &section.rows {
                lines.push(HistoryLine::Entry {
                    day_key: row.day_key.clone(),
                    index: row.index,
                    text: row.display_line(),
                });
            }
        }

        let mut state = ListState::default();
        state.select(first_entry(&lines));
        Self { lines, state }
    }

    fn entry_positions(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| matches!(line, HistoryLine::Entry { .. }))
            .map(|(i, _)| i)
            .collect()
    }

    fn select_step(&mut self, forward: bool) {
        let entries = self.entry_positions();
        if entries.is_empty() {
            self.state.select(None);
            return;
        }

        let current = self
            .state
            .selected()
            .and_then(|s| entries.iter().position(|&i| i == s));
        let next = match current {
            Some(pos) => {
                if forward {
                    if pos + 1 >= entries.len() {
                        0
                    } else {
                        pos + 1
                    }
                } else if pos == 0 {
                    entries.len() - 1
                } else {
                    pos - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(entries[next]));
    }

    fn selected_entry(&self) -> Option<(&str, usize)> {
        match self.lines.get(self.state.selected()?)? {
            HistoryLine::Entry { day_key, index, .. } => Some((day_key.as_str(), *index)),
            HistoryLine::DayHeader(_) => None,
        }
    }

    /// After a rebuild, land on the entry at or just before the old
    /// position so a delete does not throw the cursor to the top.
    fn restore_selection(&mut self, previous: Option<usize>) {
        let Some(target) = previous else {
            return;
        };
        let entries = self.entry_positions();
        if entries.is_empty() {
            self.state.select(None);
            return;
        }
        let pick = entries
            .iter()
            .rev()
            .find(|&&i| i <= target)
            .copied()
            .unwrap_or(entries[0]);
        self.state.select(Some(pick));
    }
}

fn first_entry(lines: &[HistoryLine]) -> Option<usize> {
    lines
        .iter()
        .position(|line| matches!(line, HistoryLine::Entry { .. }))
}

pub struct App {
    pub journal: Journal<FileJournalRepository>,
    pub palette: Vec<Mood>,
    pub tab: Tab,
    pub mode: Mode,
    pub picked: usize,
    pub carousel_offset: usize,
    pub moods_list: HistoryList,
    pub diary_list: HistoryList,
    pub input: String,
    pub cursor_position: usize,
    pub notice: Option<String>,
    pending_delete: Option<(Tab, String, usize)>,
}

impl App {
    pub fn new(journal: Journal<FileJournalRepository>) -> App {
        let moods_list = HistoryList::from_sections(build_view(journal.moods()));
        let diary_list = HistoryList::from_sections(build_view(journal.diary()));
        App {
            journal,
            palette: palette::default_palette(),
            tab: Tab::Moods,
            mode: Mode::Browse,
            picked: 0,
            carousel_offset: 0,
            moods_list,
            diary_list,
            input: String::new(),
            cursor_position: 0,
            notice: None,
            pending_delete: None,
        }
    }

    pub fn switch_tab(&mut self) {
        self.tab = match self.tab {
            Tab::Moods => Tab::Diary,
            Tab::Diary => Tab::Moods,
        };
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    fn active_list(&mut self) -> &mut HistoryList {
        match self.tab {
            Tab::Moods => &mut self.moods_list,
            Tab::Diary => &mut self.diary_list,
        }
    }

    pub fn next_row(&mut self) {
        self.active_list().select_step(true);
    }

    pub fn previous_row(&mut self) {
        self.active_list().select_step(false);
    }

    pub fn carousel_left(&mut self) {
        if self.tab != Tab::Moods {
            return;
        }
        if self.picked > 0 {
            self.picked -= 1;
        }
        if self.picked < self.carousel_offset {
            self.carousel_offset = self.picked;
        }
    }

    pub fn carousel_right(&mut self) {
        if self.tab != Tab::Moods {
            return;
        }
        if self.picked + 1 < self.palette.len() {
            self.picked += 1;
        }
        if self.picked >= self.carousel_offset + CAROUSEL_WINDOW {
            self.carousel_offset = self.picked + 1 - CAROUSEL_WINDOW;
        }
    }

    pub fn record_picked_mood(&mut self) -> Result<()> {
        if self.tab != Tab::Moods {
            return Ok(());
        }
        let mood = self.palette[self.picked].clone();
        self.journal.add_mood(&mood)?;
        self.rebuild_moods();
        Ok(())
    }

    pub fn enter_diary_input(&mut self) {
        if self.tab != Tab::Diary {
            return;
        }
        self.mode = Mode::DiaryInput;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn cancel_diary_input(&mut self) {
        self.mode = Mode::Browse;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn submit_diary(&mut self) -> Result<()> {
        match self.journal.add_diary(&self.input) {
            Ok(()) => {
                self.input.clear();
                self.cursor_position = 0;
                self.mode = Mode::Browse;
                self.rebuild_diary();
                Ok(())
            }
            Err(err)
                if err.downcast_ref::<JournalError>() == Some(&JournalError::EmptyInput) =>
            {
                // Stay in input mode so the draft is not lost.
                self.notice = Some("Please write something before saving.".to_string());
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    pub fn request_delete(&mut self) {
        let target = match self.tab {
            Tab::Moods => self.moods_list.selected_entry(),
            Tab::Diary => self.diary_list.selected_entry(),
        };
        if let Some((day_key, index)) = target {
            let day_key = day_key.to_string();
            self.pending_delete = Some((self.tab, day_key, index));
            self.mode = Mode::ConfirmDelete;
        }
    }

    pub fn confirm_delete(&mut self) -> Result<()> {
        if let Some((tab, day_key, index)) = self.pending_delete.take() {
            match tab {
                Tab::Moods => {
                    self.journal.delete_mood(&day_key, index)?;
                    self.rebuild_moods();
                }
                Tab::Diary => {
                    self.journal.delete_diary(&day_key, index)?;
                    self.rebuild_diary();
                }
            }
        }
        self.mode = Mode::Browse;
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.mode = Mode::Browse;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self
            .input
            .chars()
            .take(self.cursor_position)
            .map(|c| c.len_utf8())
            .sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self
                .input
                .chars()
                .take(self.cursor_position - 1)
                .map(|c| c.len_utf8())
                .sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    // Full rebuild from the store after every mutation; the lists never
    // patch themselves incrementally.

    fn rebuild_moods(&mut self) {
        let previous = self.moods_list.state.selected();
        self.moods_list = HistoryList::from_sections(build_view(self.journal.moods()));
        self.moods_list.restore_selection(previous);
    }

    fn rebuild_diary(&mut self) {
        let previous = self.diary_list.state.selected();
        self.diary_list = HistoryList::from_sections(build_view(self.journal.diary()));
        self.diary_list.restore_selection(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodlog_core::{EntryRow, RowImage};

    fn section(title: &str, times: &[&str]) -> DaySection {
        DaySection {
            title: title.to_string(),
            rows: times
                .iter()
                .enumerate()
                .map(|(index, time)| EntryRow {
                    day_key: title.to_string(),
                    index,
                    time: time.to_string(),
                    text: "Happy".to_string(),
                    image: Some(RowImage {
                        src: "images/happy.png".to_string(),
                        alt: "Happy face".to_string(),
                    }),
                })
                .collect(),
        }
    }

    #[test]
    fn initial_selection_skips_the_day_header() {
        let list = HistoryList::from_sections(vec![section("August 30, 2026", &["9:05 AM"])]);
        assert_eq!(list.state.selected(), Some(1));
        assert_eq!(list.selected_entry(), Some(("August 30, 2026", 0)));
    }

    #[test]
    fn stepping_skips_headers_and_wraps() {
        let mut list = HistoryList::from_sections(vec![
            section("August 30, 2026", &["9:05 AM", "2:15 PM"]),
            section("July 4, 2026", &["1:00 PM"]),
        ]);
        // Lines: header, entry, entry, header, entry
        assert_eq!(list.state.selected(), Some(1));

        list.select_step(true);
        assert_eq!(list.state.selected(), Some(2));
        list.select_step(true);
        assert_eq!(list.state.selected(), Some(4));
        list.select_step(true);
        assert_eq!(list.state.selected(), Some(1));

        list.select_step(false);
        assert_eq!(list.state.selected(), Some(4));
    }

    #[test]
    fn empty_list_selects_nothing() {
        let mut list = HistoryList::from_sections(vec![]);
        assert_eq!(list.state.selected(), None);
        list.select_step(true);
        assert_eq!(list.state.selected(), None);
        assert_eq!(list.selected_entry(), None);
    }

    #[test]
    fn restore_selection_clamps_to_the_nearest_entry() {
        let mut list = HistoryList::from_sections(vec![section("August 30, 2026", &["9:05 AM"])]);
        // Old cursor sat past the end of the rebuilt list.
        list.restore_selection(Some(10));
        assert_eq!(list.state.selected(), Some(1));
    }
}

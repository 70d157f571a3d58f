use serde::{Deserialize, Serialize};

/// A free-text diary entry. `text` is non-empty after trimming; the
/// journal service enforces that before an entry is ever constructed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DiaryEntry {
    pub text: String,
    pub time: String,
}

impl DiaryEntry {
    pub fn new(text: String, time: String) -> Self {
        Self { text, time }
    }
}

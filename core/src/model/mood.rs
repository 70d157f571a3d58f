use serde::{Deserialize, Serialize};

/// One selectable mood as the UI palette offers it. The store records
/// whatever triple it is handed; labels are not checked against an enum,
/// so extending the palette is a UI-only change.
#[derive(Debug, Clone, PartialEq)]
pub struct Mood {
    pub label: String,
    pub image_ref: String,
    pub image_alt: String,
}

impl Mood {
    pub fn new(label: &str, image_ref: &str, image_alt: &str) -> Self {
        Self {
            label: label.to_string(),
            image_ref: image_ref.to_string(),
            image_alt: image_alt.to_string(),
        }
    }
}

/// A recorded mood. `time` is the pre-formatted "HH:MM AM/PM" string;
/// the serde names match the persisted blob layout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MoodEntry {
    pub mood: String,
    pub time: String,
    #[serde(rename = "imgSrc")]
    pub image_ref: String,
    #[serde(rename = "imgAlt")]
    pub image_alt: String,
}

impl MoodEntry {
    pub fn new(mood: &Mood, time: String) -> Self {
        Self {
            mood: mood.label.clone(),
            time,
            image_ref: mood.image_ref.clone(),
            image_alt: mood.image_alt.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_with_blob_field_names() {
        let mood = Mood::new("Happy", "images/happy.png", "Happy face");
        let entry = MoodEntry::new(&mood, "9:05 AM".to_string());
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["mood"], "Happy");
        assert_eq!(value["time"], "9:05 AM");
        assert_eq!(value["imgSrc"], "images/happy.png");
        assert_eq!(value["imgAlt"], "Happy face");
    }
}

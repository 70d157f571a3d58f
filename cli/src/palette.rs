use moodlog_core::Mood;

/// The built-in mood palette. The core records whatever triple it is
/// handed, so changing the palette is a change here and nowhere else.
pub fn default_palette() -> Vec<Mood> {
    [
        ("Happy", "images/happy.png", "Happy face"),
        ("Sad", "images/sad.png", "Sad face"),
        ("Angry", "images/angry.png", "Angry face"),
        ("Calm", "images/calm.png", "Calm face"),
        ("Excited", "images/excited.png", "Excited face"),
        ("Tired", "images/tired.png", "Tired face"),
        ("Anxious", "images/anxious.png", "Anxious face"),
        ("Loved", "images/loved.png", "Loved face"),
    ]
    .into_iter()
    .map(|(label, image_ref, image_alt)| Mood::new(label, image_ref, image_alt))
    .collect()
}

pub fn find_mood<'a>(palette: &'a [Mood], label: &str) -> Option<&'a Mood> {
    palette.iter().find(|m| m.label.eq_ignore_ascii_case(label))
}

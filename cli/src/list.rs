use moodlog_core::{build_view, DayLog, RowSource};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct EntryLine {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Entry")]
    entry: String,
}

/// Prints one table per day, most recent day first. The `#` column is
/// the index `delete` expects for that day.
pub fn print_log<T: RowSource>(log: &DayLog<T>, kind: &str) {
    let sections = build_view(log);
    if sections.is_empty() {
        println!("No {} entries yet.", kind);
        return;
    }

    for section in sections {
        println!("\n\x1b[1;36m{}\x1b[0m", section.title);

        let lines: Vec<EntryLine> = section
            .rows
            .iter()
            .map(|row| EntryLine {
                index: row.index,
                time: row.time.clone(),
                entry: row.text.clone(),
            })
            .collect();

        let mut table = Table::new(lines);
        table.with(Style::rounded());
        println!("{}", table);
    }
}

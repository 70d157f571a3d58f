mod list;
mod palette;
mod tui;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use moodlog_core::{FileJournalRepository, Journal, JournalError};

#[derive(Parser)]
#[command(name = "moodlog")]
#[command(about = "A mood and diary journal for your terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Record a mood from the palette (usage: mood Happy)
    Mood {
        label: String,
    },
    /// Record a diary entry (usage: diary slept well, long walk)
    Diary {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// List recorded entries, most recent day first
    List {
        #[arg(value_enum)]
        store: Option<Store>,
    },
    /// Delete one entry by day and index, as printed by `list`
    Delete {
        #[arg(value_enum)]
        store: Store,
        /// The day heading, e.g. "August 30, 2026"
        day: String,
        /// The entry's # within that day
        index: usize,
    },
    /// Open the terminal user interface
    Tui,
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum Store {
    Moods,
    Diary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let repo = FileJournalRepository::new(None)?;
    let mut journal = Journal::open(repo)?;

    match cli.command {
        Some(Commands::Mood { label }) => {
            let palette = palette::default_palette();
            match palette::find_mood(&palette, &label) {
                Some(mood) => {
                    journal.add_mood(mood)?;
                    println!("Recorded mood: {}", mood.label);
                }
                None => {
                    println!("Unknown mood '{}'. The palette offers:", label);
                    for mood in &palette {
                        println!("  {}", mood.label);
                    }
                }
            }
        }
        Some(Commands::Diary { text }) => match journal.add_diary(&text.join(" ")) {
            Ok(()) => println!("Diary entry saved."),
            Err(err)
                if err.downcast_ref::<JournalError>() == Some(&JournalError::EmptyInput) =>
            {
                println!("Please write something before saving.");
            }
            Err(err) => return Err(err),
        },
        Some(Commands::List { store }) => match store.unwrap_or(Store::Moods) {
            Store::Moods => list::print_log(journal.moods(), "mood"),
            Store::Diary => list::print_log(journal.diary(), "diary"),
        },
        Some(Commands::Delete { store, day, index }) => {
            if confirm_delete()? {
                match store {
                    Store::Moods => journal.delete_mood(&day, index)?,
                    Store::Diary => journal.delete_diary(&day, index)?,
                }
                println!("Entry deleted.");
            } else {
                println!("Cancelled.");
            }
        }
        Some(Commands::Tui) | None => {
            tui::run(journal)?;
        }
    }
    Ok(())
}

fn confirm_delete() -> Result<bool> {
    print!("Are you sure you want to delete this entry? [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

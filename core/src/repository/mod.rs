pub mod file;
pub mod traits;

// Re-export
pub use file::FileJournalRepository;
pub use traits::JournalRepository;

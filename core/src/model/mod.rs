pub mod day_log;
pub mod diary;
pub mod mood;

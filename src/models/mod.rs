pub mod day;
pub mod event_kind;
pub mod issue;
pub mod occurrence;
pub mod report;
pub mod summary;
pub mod worked;

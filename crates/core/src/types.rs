/// Primary keys are SQLite INTEGER PRIMARY KEY (rowid aliases).
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// All document ids are sequential integers assigned by the server.
pub type DbId = i64;

/// Review ratings on the 1-10 scale.
pub type Rating = i32;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

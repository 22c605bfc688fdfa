/// Users are identified by the auth provider's UUID subject.
pub type UserId = uuid::Uuid;

/// Teams, superpuzzles and milestones use platform-generated UUIDs.
pub type EntityId = uuid::Uuid;

/// Token quantities as stored in the platform's `numeric` columns.
pub type TokenAmount = f64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Role-profile id (`local_managers.id` / `remote_managers.id`).
///
/// This is the identity handed back by credential and token verification and
/// the id recorded as `changed_by` on catalog rows.
pub type ManagerId = DbId;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Release dates carry no time-of-day component.
pub type ReleaseDate = chrono::NaiveDate;

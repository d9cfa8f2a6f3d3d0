//! SQL schema for the roster SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- `id` is storage-internal; `user_id` is the business identifier and
-- carries the uniqueness constraint the upload pipeline relies on.
CREATE TABLE IF NOT EXISTS employees (
    id              INTEGER PRIMARY KEY,
    user_id         TEXT NOT NULL UNIQUE,
    user_name       TEXT NOT NULL,
    email           TEXT NOT NULL,
    business_unit   TEXT NOT NULL,   -- canonical BusinessUnit string
    department      TEXT NOT NULL,   -- canonical Department string
    date_of_joining TEXT NOT NULL,   -- ISO 8601 date (YYYY-MM-DD)
    mobile_number   TEXT NOT NULL
);

PRAGMA user_version = 1;
";

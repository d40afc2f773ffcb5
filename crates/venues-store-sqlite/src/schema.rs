//! SQL schema for the venue SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Shared by every venue at the same street and zip.
CREATE TABLE IF NOT EXISTS addresses (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    street    TEXT NOT NULL,
    city      TEXT NOT NULL DEFAULT 'Austin',
    state     TEXT NOT NULL DEFAULT 'TX' CHECK (length(state) = 2),
    zip       TEXT NOT NULL DEFAULT '',
    inserted  TEXT NOT NULL,              -- RFC 3339 UTC; set per row
    UNIQUE (street, zip)
);

CREATE TABLE IF NOT EXISTS venues (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    address_id  INTEGER NOT NULL REFERENCES addresses(id),
    name        TEXT NOT NULL,
    closed      INTEGER NOT NULL DEFAULT 0,
    image_url   TEXT,
    description TEXT,
    inserted    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS ratings (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    venue_id  INTEGER NOT NULL REFERENCES venues(id) ON DELETE CASCADE,
    score     INTEGER NOT NULL,
    review    TEXT,
    inserted  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS venues_name_idx    ON venues(name COLLATE NOCASE);
CREATE INDEX IF NOT EXISTS ratings_venue_idx  ON ratings(venue_id);

PRAGMA user_version = 1;
";

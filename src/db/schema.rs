//! Database schema and migrations for Lentille.
//!
//! Migrations are applied in order when the database is opened; the
//! `schema_version` table records which ones have run.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: users
    r#"
CREATE TABLE users (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    username    TEXT NOT NULL UNIQUE CHECK (length(username) > 0),
    password    TEXT NOT NULL,           -- Argon2 PHC string
    created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
);
"#,
    // v2: equipment catalog (two structurally identical tables)
    r#"
CREATE TABLE cameras (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    brand         TEXT NOT NULL,
    model         TEXT NOT NULL,
    release_date  TEXT NOT NULL DEFAULT '',
    score         REAL NOT NULL DEFAULT 0,
    category      TEXT NOT NULL DEFAULT '',
    summary       TEXT NOT NULL DEFAULT ''
);

CREATE TABLE telescopes (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    brand         TEXT NOT NULL,
    model         TEXT NOT NULL,
    release_date  TEXT NOT NULL DEFAULT '',
    score         REAL NOT NULL DEFAULT 0,
    category      TEXT NOT NULL DEFAULT '',
    summary       TEXT NOT NULL DEFAULT ''
);
"#,
    // v3: forum
    r#"
CREATE TABLE forum_categories (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL UNIQUE
);

CREATE TABLE forum_threads (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    category_id  INTEGER NOT NULL REFERENCES forum_categories(id),
    author_id    INTEGER NOT NULL REFERENCES users(id),
    title        TEXT NOT NULL CHECK (length(title) > 0),
    created_at   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
);

CREATE INDEX idx_forum_threads_category ON forum_threads(category_id, created_at);

CREATE TABLE forum_posts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    thread_id   INTEGER NOT NULL REFERENCES forum_threads(id),
    author_id   INTEGER NOT NULL REFERENCES users(id),
    content     TEXT NOT NULL CHECK (length(content) > 0),
    created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
);

CREATE INDEX idx_forum_posts_thread ON forum_posts(thread_id, created_at);
"#,
];

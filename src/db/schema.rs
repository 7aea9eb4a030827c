/// Table the store reads and writes.
///
/// Applied with `IF NOT EXISTS` on every open; existing tables are left alone.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL
);
"#;

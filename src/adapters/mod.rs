// Adapters layer: concrete implementations for external systems (local files, SQLite).

pub mod storage;

/// Data layer: core types and catalog loading.
///
/// Architecture:
/// ```text
///  music_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  Vec<Song>, distinct-title index
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ recommend  │  classify query → filter / suggest
///   └────────────┘
/// ```
pub mod loader;
pub mod model;

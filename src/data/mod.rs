/// Data layer: catalog types, loading, filtering and writing.
///
/// Architecture:
/// ```text
///   ids.json (UTF-16)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode → strip NULs → parse → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  keep records whose groupID is in the AllowList
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  ASCII JSON → ships.json
///   └──────────┘
/// ```

pub mod allow_list;
pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;

/// Data layer: core types, loading, and summary reporting.
///
/// Architecture:
/// ```text
///  {DATA_PATH}/raw/*.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  existence check + parse → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ DatasetCollection │  DatasetKind → Table
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  counts, cardinalities, rating range → text
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod summary;

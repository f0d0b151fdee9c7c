/// Data layer: core types, sanitizers, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, sanitize cells → PepperDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ PepperDataset │  Vec<PepperRecord>, category indices
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply FilterCriteria → visible indices + summary
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod sanitize;

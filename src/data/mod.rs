/// Data layer: core types, loading, caching, and the derived views.
///
/// Architecture:
/// ```text
///  HTTPS CSV feed
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse → StationTable (coordinates canonicalised)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  URL → Arc<StationTable>, successes only
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  views    │  histogram / filtered map subset / operator counts
///   └──────────┘
/// ```

pub mod cache;
pub mod filter;
pub mod loader;
pub mod model;
pub mod views;

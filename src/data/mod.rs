/// Data layer: listing types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Listings (coerce cells, record columns)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Listings  │  Vec<Listing> + Columns presence flags
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  keyword / BSR / price predicates → new Listings
///   └──────────┘
/// ```

pub mod coerce;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;

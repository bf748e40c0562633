/// Analysis pipeline over loaded listings.
///
/// ```text
///   Listings ──► filter::apply(criteria) ──► filtered Listings
///                                              │
///                        ┌─────────────────────┴──────────────┐
///                        ▼                                    ▼
///            tokenize(title) → top_n             summarize_by_brand
///                        │                                    │
///                        ▼                                    ▼
///                 Vec<WordCount>                    Vec<BrandSummary>
/// ```
///
/// Every run starts from scratch; nothing here keeps state between calls.
pub mod brand;
pub mod frequency;
pub mod tokenize;

use crate::data::filter::{self, FilterCriteria};
use crate::data::model::Listings;

use brand::{BrandSummary, summarize_by_brand};
use frequency::{WordCount, top_n};
use tokenize::tokenize;

/// Everything the viewer shows for one set of filter criteria.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    /// Listings passing the filters, in source order.
    pub listings: Listings,
    /// Most frequent title words over `listings`.
    pub top_words: Vec<WordCount>,
    /// Per-brand statistics over `listings`.
    pub brands: Vec<BrandSummary>,
}

/// Filter `listings` with `criteria` and compute both summaries.
pub fn run(listings: &Listings, criteria: &FilterCriteria) -> Analysis {
    let filtered = filter::apply(listings, criteria);

    let top_words = if filtered.columns.title {
        let tokens = filtered
            .iter()
            .flat_map(|row| tokenize(row.title.as_deref()));
        top_n(tokens, criteria.top_n)
    } else {
        Vec::new()
    };

    let brands = summarize_by_brand(&filtered);

    log::debug!(
        "analysis: {} of {} listings pass, {} words, {} brands",
        filtered.len(),
        listings.len(),
        top_words.len(),
        brands.len()
    );

    Analysis {
        listings: filtered,
        top_words,
        brands,
    }
}

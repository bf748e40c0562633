use super::model::{Listing, Listings};

/// Default number of words in the title frequency table.
pub const DEFAULT_TOP_N: usize = 20;

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// Everything the pipeline needs from the filter widgets, passed explicitly
/// on every run.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against the title. `None` and
    /// `Some("")` both mean "no keyword filter".
    pub keyword: Option<String>,
    /// Inclusive BSR bounds.
    pub rank_min: i64,
    pub rank_max: i64,
    /// Inclusive price bounds.
    pub price_min: f64,
    pub price_max: f64,
    /// Maximum number of entries in the word frequency table.
    pub top_n: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            keyword: None,
            rank_min: 0,
            rank_max: 1_000_000,
            price_min: 0.0,
            price_max: 100.0,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl FilterCriteria {
    /// The keyword, lower-cased, if one is active.
    fn active_keyword(&self) -> Option<String> {
        self.keyword
            .as_deref()
            .filter(|k| !k.is_empty())
            .map(str::to_lowercase)
    }
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// Return the listings that pass every active filter, in source order.
///
/// Each filter only applies when its column exists in the source:
///
/// * Keyword: the title must contain it (case-insensitive); a missing title
///   fails.
/// * Rank / price: a row with a missing value fails the bound check.
///
/// Inverted bounds (min > max) simply match nothing.
pub fn apply(listings: &Listings, criteria: &FilterCriteria) -> Listings {
    let columns = listings.columns;
    let keyword = if columns.title {
        criteria.active_keyword()
    } else {
        None
    };

    let rows: Vec<Listing> = listings
        .iter()
        .filter(|row| {
            if let Some(kw) = &keyword {
                match &row.title {
                    Some(title) if title.to_lowercase().contains(kw.as_str()) => {}
                    _ => return false,
                }
            }
            if columns.rank {
                match row.rank {
                    Some(r) if (criteria.rank_min..=criteria.rank_max).contains(&r) => {}
                    _ => return false,
                }
            }
            if columns.price {
                match row.price {
                    Some(p) if p >= criteria.price_min && p <= criteria.price_max => {}
                    _ => return false,
                }
            }
            true
        })
        .cloned()
        .collect();

    listings.with_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Columns;

    fn listing(title: Option<&str>, rank: Option<i64>, price: Option<f64>) -> Listing {
        Listing {
            title: title.map(str::to_string),
            rank,
            price,
            ..Listing::default()
        }
    }

    fn sample() -> Listings {
        Listings::new(
            vec![
                listing(Some("Funny Cat Dad Shirt"), Some(1_500), Some(19.99)),
                listing(Some("Retro Sunset Tee"), Some(250_000), Some(22.0)),
                listing(Some("CAT lover hoodie"), None, Some(34.99)),
                listing(None, Some(10), Some(15.0)),
                listing(Some("Dog Mom Mug"), Some(999), None),
            ],
            Columns::all(),
        )
    }

    fn titles(listings: &Listings) -> Vec<Option<&str>> {
        listings.iter().map(|r| r.title.as_deref()).collect()
    }

    #[test]
    fn test_defaults_drop_rows_with_missing_numbers() {
        let out = apply(&sample(), &FilterCriteria::default());
        assert_eq!(
            titles(&out),
            vec![Some("Funny Cat Dad Shirt"), Some("Retro Sunset Tee"), None]
        );
    }

    #[test]
    fn test_keyword_is_case_insensitive_and_excludes_missing_titles() {
        let columns = Columns {
            title: true,
            ..Columns::default()
        };
        let listings = Listings::new(sample().rows, columns);
        let criteria = FilterCriteria {
            keyword: Some("cAt".into()),
            ..FilterCriteria::default()
        };
        let out = apply(&listings, &criteria);
        assert_eq!(
            titles(&out),
            vec![Some("Funny Cat Dad Shirt"), Some("CAT lover hoodie")]
        );
    }

    #[test]
    fn test_empty_keyword_is_no_filter() {
        let listings = sample();
        let empty = FilterCriteria {
            keyword: Some(String::new()),
            ..FilterCriteria::default()
        };
        let none = FilterCriteria::default();
        assert_eq!(apply(&listings, &empty), apply(&listings, &none));

        let nothing = FilterCriteria {
            keyword: Some("zebra".into()),
            ..FilterCriteria::default()
        };
        assert!(apply(&listings, &nothing).is_empty());
    }

    #[test]
    fn test_rank_bounds_are_inclusive() {
        let listings = Listings::new(
            vec![
                listing(Some("a"), Some(100), None),
                listing(Some("b"), Some(101), None),
                listing(Some("c"), Some(50), None),
            ],
            Columns {
                title: true,
                rank: true,
                ..Columns::default()
            },
        );
        let criteria = FilterCriteria {
            rank_min: 50,
            rank_max: 100,
            ..FilterCriteria::default()
        };
        assert_eq!(titles(&apply(&listings, &criteria)), vec![Some("a"), Some("c")]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let listings = Listings::new(
            vec![
                listing(Some("a"), None, Some(10.0)),
                listing(Some("b"), None, Some(10.01)),
            ],
            Columns {
                title: true,
                price: true,
                ..Columns::default()
            },
        );
        let criteria = FilterCriteria {
            price_max: 10.0,
            ..FilterCriteria::default()
        };
        assert_eq!(titles(&apply(&listings, &criteria)), vec![Some("a")]);
    }

    #[test]
    fn test_absent_columns_skip_their_filters() {
        // No rank/price columns: missing values must not exclude anything.
        let listings = Listings::new(
            vec![listing(Some("a"), None, None), listing(Some("b"), None, None)],
            Columns {
                title: true,
                ..Columns::default()
            },
        );
        let criteria = FilterCriteria {
            rank_min: 5,
            rank_max: 1,
            price_min: 50.0,
            price_max: 1.0,
            ..FilterCriteria::default()
        };
        assert_eq!(apply(&listings, &criteria).len(), 2);

        // No title column: a keyword cannot exclude anything either.
        let untitled = Listings::new(
            vec![listing(None, Some(1), None)],
            Columns {
                rank: true,
                ..Columns::default()
            },
        );
        let criteria = FilterCriteria {
            keyword: Some("cat".into()),
            ..FilterCriteria::default()
        };
        assert_eq!(apply(&untitled, &criteria).len(), 1);
    }

    #[test]
    fn test_inverted_bounds_yield_empty() {
        let criteria = FilterCriteria {
            rank_min: 10,
            rank_max: 5,
            ..FilterCriteria::default()
        };
        assert!(apply(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_idempotent_and_never_grows() {
        let listings = sample();
        let criteria_set = [
            FilterCriteria::default(),
            FilterCriteria {
                keyword: Some("t".into()),
                rank_max: 2_000,
                ..FilterCriteria::default()
            },
            FilterCriteria {
                price_min: 20.0,
                price_max: 40.0,
                rank_max: i64::MAX,
                ..FilterCriteria::default()
            },
        ];
        for criteria in &criteria_set {
            let once = apply(&listings, criteria);
            let twice = apply(&once, criteria);
            assert_eq!(once, twice);
            assert!(once.len() <= listings.len());
        }
    }

    #[test]
    fn test_input_is_untouched() {
        let listings = sample();
        let before = listings.clone();
        let _ = apply(
            &listings,
            &FilterCriteria {
                keyword: Some("cat".into()),
                ..FilterCriteria::default()
            },
        );
        assert_eq!(listings, before);
    }
}

use std::cmp::Ordering;

use super::model::{Column, Listing, Listings};

/// Direction of a table sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Compare two optional values; `None` always sorts after any value,
/// regardless of direction.
fn cmp_missing_last<T, F>(a: Option<T>, b: Option<T>, direction: SortDirection, cmp: F) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Ascending => cmp(&a, &b),
            SortDirection::Descending => cmp(&b, &a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare(a: &Listing, b: &Listing, key: Column, direction: SortDirection) -> Ordering {
    match key {
        Column::Title => cmp_missing_last(
            a.title.as_deref().map(str::to_lowercase),
            b.title.as_deref().map(str::to_lowercase),
            direction,
            Ord::cmp,
        ),
        Column::Brand => cmp_missing_last(
            a.brand.as_deref().map(str::to_lowercase),
            b.brand.as_deref().map(str::to_lowercase),
            direction,
            Ord::cmp,
        ),
        Column::Id => cmp_missing_last(a.id.as_deref(), b.id.as_deref(), direction, Ord::cmp),
        Column::Price => cmp_missing_last(a.price, b.price, direction, f64::total_cmp),
        Column::Rank => cmp_missing_last(a.rank, b.rank, direction, Ord::cmp),
        Column::Date => cmp_missing_last(a.date, b.date, direction, Ord::cmp),
    }
}

/// Return a copy of `listings` stably sorted by `key`.
pub fn sort_listings(listings: &Listings, key: Column, direction: SortDirection) -> Listings {
    let mut rows = listings.rows.clone();
    rows.sort_by(|a, b| compare(a, b, key, direction));
    listings.with_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Columns;

    fn ranked(title: &str, rank: Option<i64>) -> Listing {
        Listing {
            title: Some(title.to_string()),
            rank,
            ..Listing::default()
        }
    }

    fn order(listings: &Listings) -> Vec<&str> {
        listings
            .iter()
            .map(|r| r.title.as_deref().unwrap_or("-"))
            .collect()
    }

    #[test]
    fn test_sort_by_rank_missing_last_both_ways() {
        let listings = Listings::new(
            vec![
                ranked("b", Some(20)),
                ranked("none", None),
                ranked("a", Some(10)),
                ranked("c", Some(30)),
            ],
            Columns::all(),
        );

        let asc = sort_listings(&listings, Column::Rank, SortDirection::Ascending);
        assert_eq!(order(&asc), vec!["a", "b", "c", "none"]);

        let desc = sort_listings(&listings, Column::Rank, SortDirection::Descending);
        assert_eq!(order(&desc), vec!["c", "b", "a", "none"]);

        // Source untouched.
        assert_eq!(order(&listings), vec!["b", "none", "a", "c"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let listings = Listings::new(
            vec![
                ranked("first", Some(5)),
                ranked("other", Some(1)),
                ranked("second", Some(5)),
            ],
            Columns::all(),
        );
        let desc = sort_listings(&listings, Column::Rank, SortDirection::Descending);
        assert_eq!(order(&desc), vec!["first", "second", "other"]);
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let listings = Listings::new(
            vec![ranked("banana", None), ranked("Apple", None), ranked("cherry", None)],
            Columns::all(),
        );
        let asc = sort_listings(&listings, Column::Title, SortDirection::Ascending);
        assert_eq!(order(&asc), vec!["Apple", "banana", "cherry"]);
    }
}

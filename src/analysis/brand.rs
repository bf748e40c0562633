use std::collections::HashMap;

use serde::Serialize;

use crate::data::model::Listings;

/// Aggregate statistics for one brand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandSummary {
    /// `None` groups the listings that carry no brand.
    pub brand: Option<String>,
    pub count: usize,
    pub avg_rank: Option<f64>,
    pub avg_price: Option<f64>,
}

/// Running sum over the present values of one column.
#[derive(Default)]
struct Mean {
    sum: f64,
    n: usize,
}

impl Mean {
    fn add(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.n += 1;
        }
    }

    fn value(&self) -> Option<f64> {
        (self.n > 0).then(|| self.sum / self.n as f64)
    }
}

struct Group<'a> {
    brand: Option<&'a str>,
    count: usize,
    rank: Mean,
    price: Mean,
}

/// Group listings by exact brand value and summarise each group.
///
/// Listings without a brand form their own group. Groups are ordered by
/// count descending, ties in the order each brand first appears. Without a
/// brand column the result is empty.
pub fn summarize_by_brand(listings: &Listings) -> Vec<BrandSummary> {
    if !listings.columns.brand {
        return Vec::new();
    }

    let mut groups: Vec<Group<'_>> = Vec::new();
    let mut index: HashMap<Option<&str>, usize> = HashMap::new();

    for row in listings.iter() {
        let key = row.brand.as_deref();
        let i = *index.entry(key).or_insert_with(|| {
            groups.push(Group {
                brand: key,
                count: 0,
                rank: Mean::default(),
                price: Mean::default(),
            });
            groups.len() - 1
        });
        let group = &mut groups[i];
        group.count += 1;
        group.rank.add(row.rank.map(|r| r as f64));
        group.price.add(row.price);
    }

    let mut summaries: Vec<BrandSummary> = groups
        .into_iter()
        .map(|g| BrandSummary {
            brand: g.brand.map(str::to_string),
            count: g.count,
            avg_rank: g.rank.value(),
            avg_price: g.price.value(),
        })
        .collect();

    summaries.sort_by(|a, b| b.count.cmp(&a.count));
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Columns, Listing};

    fn row(brand: Option<&str>, rank: Option<i64>, price: Option<f64>) -> Listing {
        Listing {
            brand: brand.map(str::to_string),
            rank,
            price,
            ..Listing::default()
        }
    }

    #[test]
    fn test_summary_counts_and_means() {
        let listings = Listings::new(
            vec![
                row(Some("X"), Some(10), Some(5.0)),
                row(Some("X"), Some(20), Some(15.0)),
                row(Some("Y"), Some(5), None),
            ],
            Columns::all(),
        );
        let summary = summarize_by_brand(&listings);

        assert_eq!(
            summary,
            vec![
                BrandSummary {
                    brand: Some("X".into()),
                    count: 2,
                    avg_rank: Some(15.0),
                    avg_price: Some(10.0),
                },
                BrandSummary {
                    brand: Some("Y".into()),
                    count: 1,
                    avg_rank: Some(5.0),
                    avg_price: None,
                },
            ]
        );
    }

    #[test]
    fn test_missing_brand_is_its_own_group() {
        let listings = Listings::new(
            vec![
                row(None, Some(1), None),
                row(Some("A"), Some(3), None),
                row(None, Some(5), None),
            ],
            Columns::all(),
        );
        let summary = summarize_by_brand(&listings);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].brand, None);
        assert_eq!(summary[0].count, 2);
        assert_eq!(summary[0].avg_rank, Some(3.0));
        assert_eq!(summary[1].brand.as_deref(), Some("A"));
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let listings = Listings::new(
            vec![
                row(Some("B"), None, None),
                row(Some("A"), None, None),
                row(Some("C"), None, None),
                row(Some("C"), None, None),
            ],
            Columns::all(),
        );
        let brands: Vec<Option<String>> = summarize_by_brand(&listings)
            .into_iter()
            .map(|s| s.brand)
            .collect();
        assert_eq!(
            brands,
            vec![Some("C".into()), Some("B".into()), Some("A".into())]
        );
    }

    #[test]
    fn test_brand_matching_is_exact() {
        let listings = Listings::new(
            vec![row(Some("acme"), None, None), row(Some("Acme"), None, None)],
            Columns::all(),
        );
        assert_eq!(summarize_by_brand(&listings).len(), 2);
    }

    #[test]
    fn test_no_brand_column_gives_empty_summary() {
        let listings = Listings::new(
            vec![row(None, Some(1), Some(2.0))],
            Columns {
                rank: true,
                price: true,
                ..Columns::default()
            },
        );
        assert!(summarize_by_brand(&listings).is_empty());
    }
}

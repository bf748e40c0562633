use std::collections::HashMap;

use serde::Serialize;

/// A word and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Count exact token matches and return the `n` most frequent.
///
/// Ordered by count descending; equal counts keep the order in which each
/// word was first seen.
pub fn top_n<I>(tokens: I, n: usize) -> Vec<WordCount>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut counts: Vec<WordCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in tokens {
        let token = token.as_ref();
        match index.get(token) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(token.to_string(), counts.len());
                counts.push(WordCount {
                    word: token.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order among ties.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

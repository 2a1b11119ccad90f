use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::assembly::types::{AggregatedCount, TypeDescriptor};

/// Keep the first descriptor for each simple name, in input order
pub fn distinct_by_name(types: Vec<TypeDescriptor>) -> Vec<TypeDescriptor> {
    let mut seen = HashSet::new();
    types
        .into_iter()
        .filter(|t| seen.insert(t.name.clone()))
        .collect()
}

/// Alphabetical order ignoring case, ties broken by byte order
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// Deduplicate by simple name and sort alphabetically
pub fn distinct_sorted(types: Vec<TypeDescriptor>) -> Vec<TypeDescriptor> {
    let mut distinct = distinct_by_name(types);
    distinct.sort_by(|a, b| compare_names(&a.name, &b.name));
    distinct
}

/// Count names by exact equality, highest count first.
///
/// Equal counts keep the order in which each name first appeared.
pub fn count_by_name<I, S>(names: I) -> Vec<AggregatedCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<AggregatedCount> = Vec::new();

    for name in names {
        let name = name.as_ref();
        match index.get(name) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(name.to_string(), counts.len());
                counts.push(AggregatedCount {
                    name: name.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-appearance order among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

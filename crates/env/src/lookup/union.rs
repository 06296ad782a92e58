//! Map-union helper shared by the chained lookups.

use std::collections::HashMap;

/// Union of two tables where `preferred` wins on key collision.
pub(crate) fn map_union(
    preferred: &HashMap<String, String>,
    fallback: HashMap<String, String>,
) -> HashMap<String, String> {
    let mut merged = fallback;
    merged.extend(
        preferred
            .iter()
            .map(|(key, value)| (key.clone(), value.clone())),
    );
    merged
}

use std::collections::HashMap;

use crate::scene::data::ItemKey;

/// Classification of a new key list against the previous one.
///
/// Indices refer to positions in the respective lists. `added` and `updated` follow the new
/// order, `removed` the old order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyDiff {
    pub added: Vec<usize>,
    /// `(new_index, old_index)` pairs.
    pub updated: Vec<(usize, usize)>,
    pub removed: Vec<usize>,
}

impl KeyDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

/// Stable-key diff between two renders.
///
/// Unkeyed entries never match. When a key repeats, its first occurrence on each side is the one
/// that matches; later new occurrences count as added and later old ones as removed.
pub fn diff_keys(old: &[Option<&ItemKey>], new: &[Option<&ItemKey>]) -> KeyDiff {
    let mut by_key: HashMap<&ItemKey, usize> = HashMap::with_capacity(old.len());
    for (idx, key) in old.iter().enumerate() {
        if let Some(key) = key {
            by_key.entry(*key).or_insert(idx);
        }
    }

    let mut matched = vec![false; old.len()];
    let mut diff = KeyDiff::default();
    for (new_idx, key) in new.iter().copied().enumerate() {
        match key.and_then(|k| by_key.remove(k)) {
            Some(old_idx) => {
                matched[old_idx] = true;
                diff.updated.push((new_idx, old_idx));
            }
            None => {
                if let Some(k) = key
                    && new[..new_idx].contains(&Some(k))
                {
                    tracing::warn!(key = %k, "duplicate data key; treating as a new wave");
                }
                diff.added.push(new_idx);
            }
        }
    }

    diff.removed = matched
        .iter()
        .enumerate()
        .filter_map(|(idx, m)| (!m).then_some(idx))
        .collect();
    diff
}

#[cfg(test)]
#[path = "../../tests/unit/reconcile/diff.rs"]
mod tests;

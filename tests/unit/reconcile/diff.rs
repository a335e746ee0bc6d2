use super::*;
use std::collections::BTreeSet;

fn keys(names: &[&str]) -> Vec<ItemKey> {
    names.iter().map(|n| ItemKey::from(*n)).collect()
}

fn refs(keys: &[ItemKey]) -> Vec<Option<&ItemKey>> {
    keys.iter().map(Some).collect()
}

#[test]
fn classifies_added_updated_removed() {
    let old = keys(&["a", "b", "c"]);
    let new = keys(&["c", "d", "a"]);
    let diff = diff_keys(&refs(&old), &refs(&new));
    assert_eq!(diff.updated, vec![(0, 2), (2, 0)]);
    assert_eq!(diff.added, vec![1]);
    assert_eq!(diff.removed, vec![1]);
}

#[test]
fn set_identities_hold_for_assorted_inputs() {
    let cases: [(&[&str], &[&str]); 5] = [
        (&[], &[]),
        (&[], &["x", "y"]),
        (&["x", "y"], &[]),
        (&["0", "1", "2"], &["1", "2", "3", "4"]),
        (&["q", "r"], &["r", "q"]),
    ];
    for (o, n) in cases {
        let (old, new) = (keys(o), keys(n));
        let diff = diff_keys(&refs(&old), &refs(&new));

        assert_eq!(diff.added.len() + diff.updated.len(), new.len());
        assert_eq!(diff.removed.len() + diff.updated.len(), old.len());

        let old_set: BTreeSet<_> = old.iter().collect();
        let new_set: BTreeSet<_> = new.iter().collect();
        let added: BTreeSet<_> = diff.added.iter().map(|&i| &new[i]).collect();
        let removed: BTreeSet<_> = diff.removed.iter().map(|&i| &old[i]).collect();
        let updated: BTreeSet<_> = diff.updated.iter().map(|&(n, _)| &new[n]).collect();
        assert_eq!(added, new_set.difference(&old_set).copied().collect());
        assert_eq!(removed, old_set.difference(&new_set).copied().collect());
        assert_eq!(updated, old_set.intersection(&new_set).copied().collect());
        for &(n, o) in &diff.updated {
            assert_eq!(new[n], old[o]);
        }
    }
}

#[test]
fn unkeyed_entries_are_always_added() {
    let old = keys(&["a"]);
    let diff = diff_keys(&[None, Some(&old[0])], &[None, Some(&old[0])]);
    assert_eq!(diff.added, vec![0]);
    assert_eq!(diff.updated, vec![(1, 1)]);
    assert_eq!(diff.removed, vec![0]);
}

#[test]
fn duplicate_keys_match_once() {
    let k = keys(&["a", "a"]);
    let diff = diff_keys(&refs(&k[..1]), &refs(&k));
    assert_eq!(diff.updated, vec![(0, 0)]);
    assert_eq!(diff.added, vec![1]);
    assert!(diff.removed.is_empty());

    let diff = diff_keys(&refs(&k), &refs(&k[..1]));
    assert_eq!(diff.updated, vec![(0, 0)]);
    assert_eq!(diff.removed, vec![1]);
}

#[test]
fn identical_lists_only_update() {
    let k = keys(&["a", "b"]);
    let diff = diff_keys(&refs(&k), &refs(&k));
    assert!(diff.added.is_empty() && diff.removed.is_empty());
    assert!(!diff.is_empty());
    assert!(KeyDiff::default().is_empty());
}

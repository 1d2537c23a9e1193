//! Glues NFA-driven traversal onto a single trie and accumulates matches
//! into a record-id -> minimum-distance map.

use std::collections::HashMap;

use crate::codec::CodePoint;
use crate::nfa::Nfa;
use crate::traverse::MatchIter;
use crate::trie::{NodeId, RecordId, Trie};

pub(crate) fn search_approx(
    trie: &Trie,
    pattern: &[CodePoint],
    max_edits: usize,
) -> HashMap<RecordId, i32> {
    let mut matcher = Nfa::new(pattern, trie.depth(), max_edits);
    collect_matches(trie, Trie::ROOT, &mut matcher)
}

/// Drives `matcher` over `trie` starting at `start_node`, expanding every
/// yielded node's record ids into the result map, keeping the minimum
/// distance per record id.
pub(crate) fn collect_matches(
    trie: &Trie,
    start_node: NodeId,
    matcher: &mut Nfa,
) -> HashMap<RecordId, i32> {
    let mut out = HashMap::new();
    for (node, distance) in MatchIter::new(trie, start_node, matcher) {
        for &record_id in trie.records_at(node) {
            out.entry(record_id)
                .and_modify(|d: &mut i32| *d = (*d).min(distance))
                .or_insert(distance);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;
    use crate::trie::builder::build;

    fn dict() -> Trie {
        let strings = ["anneal", "annualy", "but", "bat", "robot"];
        build(&strings.iter().map(|s| encode(s)).collect::<Vec<_>>())
    }

    #[test]
    fn scenario_c_bet_within_one_edit() {
        let trie = dict();
        let result = search_approx(&trie, &encode("bet"), 1);
        let mut ids: Vec<_> = result.keys().copied().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(result[&2], 1);
        assert_eq!(result[&3], 1);
    }

    #[test]
    fn scenario_d_anneal_within_two_edits() {
        let trie = dict();
        let result = search_approx(&trie, &encode("anneal"), 2);
        let mut ids: Vec<_> = result.keys().copied().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn scenario_e_robotic_within_three_edits() {
        let trie = dict();
        let result = search_approx(&trie, &encode("robotic"), 3);
        assert_eq!(result.get(&4), Some(&3));
    }

    #[test]
    fn monotonic_in_k() {
        let trie = dict();
        let k1: std::collections::HashSet<_> =
            search_approx(&trie, &encode("bet"), 1).into_keys().collect();
        let k2: std::collections::HashSet<_> =
            search_approx(&trie, &encode("bet"), 2).into_keys().collect();
        assert!(k1.is_subset(&k2));
    }
}

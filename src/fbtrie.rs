//! Forward-backward two-step search (Boytsov's FB-Trie): splits the
//! pattern in half, bounds the edit budget per half, and reconciles
//! matches between a forward trie and a trie built over reversed strings.

use std::collections::HashMap;

use debug_print::debug_println;

use crate::codec::CodePoint;
use crate::nfa::Nfa;
use crate::search::collect_matches;
use crate::traverse::MatchIter;
use crate::trie::{builder, RecordId, Trie};

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForwardBackwardTrie {
    forward: Trie,
    backward: Trie,
}

impl ForwardBackwardTrie {
    pub(crate) fn build(strings: &[Vec<CodePoint>]) -> Self {
        let forward = builder::build(strings);
        let reversed: Vec<Vec<CodePoint>> = strings
            .iter()
            .map(|s| s.iter().rev().copied().collect())
            .collect();
        let backward = builder::build(&reversed);
        Self { forward, backward }
    }

    pub(crate) fn forward(&self) -> &Trie {
        &self.forward
    }

    /// Runs both the forward and backward passes and unions the results,
    /// keeping the minimum distance across both when a record id is
    /// reached by each.
    pub(crate) fn search(&self, pattern: &[CodePoint], max_edits: usize) -> HashMap<RecordId, i32> {
        let split = pattern.len() / 2;
        let head = &pattern[..split];
        let tail = &pattern[split..];

        let k = max_edits as i32;
        let k_head_fwd = (((k + 1) / 2) - 1).max(0) as usize; // ceil(k/2) - 1, clamped at 0
        let k_head_bwd = (k / 2) as usize; // floor(k/2)

        debug_println!(
            "fbtrie: forward pass, |head|={} |tail|={} k_head={}",
            head.len(),
            tail.len(),
            k_head_fwd
        );
        let mut result = two_step(&self.forward, head, tail, max_edits, k_head_fwd);
        debug_println!("fbtrie: forward pass done, {} hits", result.len());

        let rev_tail: Vec<CodePoint> = tail.iter().rev().copied().collect();
        let rev_head: Vec<CodePoint> = head.iter().rev().copied().collect();
        debug_println!(
            "fbtrie: backward pass, |head|={} |tail|={} k_head={}",
            rev_tail.len(),
            rev_head.len(),
            k_head_bwd
        );
        let backward_result = two_step(&self.backward, &rev_tail, &rev_head, max_edits, k_head_bwd);
        debug_println!("fbtrie: backward pass done, {} hits", backward_result.len());

        for (record_id, distance) in backward_result {
            result
                .entry(record_id)
                .and_modify(|d| *d = (*d).min(distance))
                .or_insert(distance);
        }
        result
    }
}

/// Matches `head` against `trie` first (budget `k_head`), then resumes a
/// fresh matcher for `tail` from each head match's node (budget tightened
/// to whatever's left of `max_edits`).
fn two_step(
    trie: &Trie,
    head: &[CodePoint],
    tail: &[CodePoint],
    max_edits: usize,
    k_head: usize,
) -> HashMap<RecordId, i32> {
    let mut head_matcher = Nfa::new(head, trie.depth(), k_head);
    let mut tail_matcher = Nfa::new(tail, trie.depth(), max_edits);

    let mut result = HashMap::new();
    for (node_head, d_head) in MatchIter::new(trie, Trie::ROOT, &mut head_matcher) {
        tail_matcher.set_max_edits(max_edits - d_head as usize);
        let tail_matches = collect_matches(trie, node_head, &mut tail_matcher);
        for (record_id, d_tail) in tail_matches {
            let total = d_head + d_tail;
            result
                .entry(record_id)
                .and_modify(|d: &mut i32| *d = (*d).min(total))
                .or_insert(total);
        }
    }
    result
}

//! NFA-driven depth-first trie traversal.
//!
//! [`MatchIter`] is the lazy sequence described by the core contract: an
//! explicit stack so the walk can be suspended between matches instead of
//! collecting everything up front, which matters once FB-Trie nests a tail
//! traversal inside a head traversal.

use crate::nfa::Nfa;
use crate::trie::{NodeId, Trie};

pub(crate) struct MatchIter<'t, 'n> {
    trie: &'t Trie,
    matcher: &'n mut Nfa,
    start_node: NodeId,
    /// (nfa_depth relative to `start_node`, absolute index into `trie`'s edge arrays)
    stack: Vec<(u32, usize)>,
    /// Emitted once, before any stack work: the "whole pattern deleted" case.
    pending_root: Option<i32>,
}

impl<'t, 'n> MatchIter<'t, 'n> {
    pub(crate) fn new(trie: &'t Trie, start_node: NodeId, matcher: &'n mut Nfa) -> Self {
        let mut stack = Vec::new();
        for edge_index in trie.edge_range(start_node).rev() {
            stack.push((0u32, edge_index));
        }
        let root_distance = matcher.get_distance(0);
        let pending_root = (root_distance >= 0).then_some(root_distance);
        Self {
            trie,
            matcher,
            start_node,
            stack,
            pending_root,
        }
    }
}

impl Iterator for MatchIter<'_, '_> {
    type Item = (NodeId, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(distance) = self.pending_root.take() {
            return Some((self.start_node, distance));
        }
        while let Some((nfa_depth, edge_index)) = self.stack.pop() {
            let symbol = self.trie.edge_symbol(edge_index);
            self.matcher.process_symbol(symbol, nfa_depth as usize);

            let next_depth = nfa_depth + 1;
            if !self.matcher.is_active(next_depth as usize) {
                continue;
            }

            let node = self.trie.edge_child(edge_index);
            for child_edge in self.trie.edge_range(node).rev() {
                self.stack.push((next_depth, child_edge));
            }

            let distance = self.matcher.get_distance(next_depth as usize);
            if distance >= 0 {
                return Some((node, distance));
            }
        }
        None
    }
}

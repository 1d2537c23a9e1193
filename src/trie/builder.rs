//! Builds a [`Trie`] from a finite, possibly unsorted, possibly duplicate
//! sequence of encoded strings.

use debug_print::debug_println;
use slab::Slab;

use super::{NodeId, RecordId, Trie};
use crate::codec::CodePoint;

/// Builds the trie, assigning record id `i` to `strings[i]`.
pub(crate) fn build(strings: &[Vec<CodePoint>]) -> Trie {
    let mut order: Vec<usize> = (0..strings.len()).collect();
    order.sort_by(|&a, &b| strings[a].cmp(&strings[b]));

    // One slab slot per trie node, holding that node's (symbol, child)
    // edges before the final CSR compaction; `insert` returning the new
    // node's id mirrors the builder's "allocate a new node" step directly,
    // and slab's append-only, index-stable storage means the later
    // `into_iter` walks nodes in the order they were allocated.
    let mut node_edges: Slab<Vec<(CodePoint, NodeId)>> = Slab::with_capacity(strings.len() + 1);
    let root = node_edges.insert(Vec::new()) as NodeId;
    debug_assert_eq!(root, Trie::ROOT);

    let mut records: Vec<Vec<RecordId>> = vec![Vec::new()];
    let mut path: Vec<NodeId> = vec![Trie::ROOT];
    let mut last: &[CodePoint] = &[];
    let mut depth: u32 = 0;

    for &record_id in &order {
        let s = strings[record_id].as_slice();
        depth = depth.max(s.len() as u32 + 1);

        let start = common_prefix_len(s, last);
        path.truncate(start + 1);
        let mut parent = path[start];

        for &c in &s[start..] {
            let child = node_edges.insert(Vec::new()) as NodeId;
            node_edges[parent as usize].push((c, child));
            records.push(Vec::new());
            path.push(child);
            parent = child;
        }
        records[parent as usize].push(record_id as RecordId);
        last = s;
    }

    let node_count = node_edges.len();
    let mut edge_ptr = Vec::with_capacity(node_count + 1);
    let mut edges = Vec::with_capacity(node_count.saturating_sub(1));
    let mut children = Vec::with_capacity(node_count.saturating_sub(1));
    edge_ptr.push(0u32);

    // Edges were already appended in ascending symbol order per node
    // (strings are consumed in sorted order), so this sort is a
    // robustness net rather than load-bearing — but it must stay, since
    // both exact search's binary search and approximate traversal's
    // "push in reverse" rely on the per-node order being strictly
    // increasing.
    for (_, mut adjacency) in node_edges {
        adjacency.sort_unstable_by_key(|&(symbol, _)| symbol);
        for (symbol, child) in adjacency {
            edges.push(symbol);
            children.push(child);
        }
        edge_ptr.push(edges.len() as u32);
    }

    debug_println!(
        "trie builder: {} nodes, {} edges, depth {}",
        node_count,
        edges.len(),
        depth
    );

    Trie {
        edge_ptr,
        edges,
        children,
        records,
        depth: depth.max(1),
    }
}

fn common_prefix_len(a: &[CodePoint], b: &[CodePoint]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

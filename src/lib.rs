//! An in-memory approximate dictionary over a fixed set of strings.
//!
//! Build once from a finite sequence of strings with [`Index::build`],
//! then answer "every indexed string within k edits of this pattern"
//! queries with [`Index::search`]. Two index variants share the same
//! surface:
//!
//! - [`IndexMethod::SingleTrie`] builds one compressed trie and drives a
//!   bit-parallel Levenshtein automaton directly over it.
//! - [`IndexMethod::FbTrie`] additionally builds a trie over the reversed
//!   strings and splits each query into a head/tail pair, trading roughly
//!   double the memory for a much smaller search space (Boytsov's
//!   FB-Trie).
//!
//! Results are record ids: the position of a matching string in the
//! sequence passed to `build`. The index does not retain the original
//! strings.

mod codec;
mod error;
mod fbtrie;
mod nfa;
mod search;
mod traverse;
mod trie;

pub use codec::DecodeError;
pub use error::Error;
pub use fbtrie::ForwardBackwardTrie;
pub use trie::{RecordId, Trie};

use std::collections::{HashMap, HashSet};

/// Schema version embedded in the outer serialized form when the `serde`
/// feature is enabled; bump on any incompatible change to the CSR layout.
pub const SCHEMA_VERSION: u32 = 1;

/// Selects which index structure [`Index::build`] constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndexMethod {
    /// One trie. Smaller; slower for large edit bounds.
    SingleTrie,
    /// Forward trie plus a trie over the reversed strings. Roughly double
    /// the memory, several times faster, and supports longer patterns.
    FbTrie,
}

/// A frozen approximate-dictionary index. Build with [`Index::build`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Index {
    SingleTrie(Trie),
    FbTrie(ForwardBackwardTrie),
}

/// The outer wire form of a serialized [`Index`]: a schema version tag
/// ahead of the payload, so a future incompatible layout change can be
/// detected at deserialization time rather than silently misread. Produce
/// one with [`Index::to_persisted`], recover the index with
/// [`Index::from_persisted`].
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Persisted {
    schema_version: u32,
    index: Index,
}

#[cfg(feature = "serde")]
impl Index {
    /// Wraps this index with the current [`SCHEMA_VERSION`] for serialization.
    pub fn to_persisted(self) -> Persisted {
        Persisted {
            schema_version: SCHEMA_VERSION,
            index: self,
        }
    }

    /// Unwraps a deserialized [`Persisted`] index, rejecting a schema
    /// version other than the one this crate version writes.
    pub fn from_persisted(persisted: Persisted) -> Result<Self, Error> {
        if persisted.schema_version != SCHEMA_VERSION {
            return Err(Error::SchemaMismatch {
                found: persisted.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        Ok(persisted.index)
    }
}

/// Result of [`Index::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Records(HashSet<RecordId>),
    Distances(HashMap<RecordId, i32>),
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        match self {
            SearchResult::Records(s) => s.is_empty(),
            SearchResult::Distances(m) => m.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SearchResult::Records(s) => s.len(),
            SearchResult::Distances(m) => m.len(),
        }
    }

    /// Record ids in the result, regardless of whether distances were requested.
    pub fn record_ids(&self) -> HashSet<RecordId> {
        match self {
            SearchResult::Records(s) => s.clone(),
            SearchResult::Distances(m) => m.keys().copied().collect(),
        }
    }
}

impl Index {
    /// Builds an index over `strings`, assigning record id `i` to `strings[i]`.
    ///
    /// An empty sequence is a valid dictionary: every subsequent search
    /// returns an empty result.
    pub fn build<S: AsRef<str>>(strings: &[S], method: IndexMethod) -> Self {
        let encoded: Vec<Vec<u32>> = strings.iter().map(|s| codec::encode(s.as_ref())).collect();
        match method {
            IndexMethod::SingleTrie => Index::SingleTrie(trie::builder::build(&encoded)),
            IndexMethod::FbTrie => Index::FbTrie(ForwardBackwardTrie::build(&encoded)),
        }
    }

    /// Searches for every indexed string within `max_edits` of `pattern`.
    ///
    /// `max_edits = 0` is an exact-match lookup. Rejects a negative
    /// `max_edits` or a `(pattern length, max_edits)` pair that exceeds
    /// this variant's budget (see [`nfa::BUDGET`](crate::nfa) for the
    /// single-trie case; FB-Trie applies the same budget to each half of
    /// the split pattern).
    pub fn search(
        &self,
        pattern: &str,
        max_edits: i32,
        return_distances: bool,
    ) -> Result<SearchResult, Error> {
        if max_edits < 0 {
            return Err(Error::NegativeMaxEdits(max_edits));
        }
        let pattern_cp = codec::encode(pattern);
        self.check_budget(pattern_cp.len(), max_edits)?;

        if max_edits == 0 {
            let ids: HashSet<RecordId> = self.forward_trie().search_exact(&pattern_cp).iter().copied().collect();
            return Ok(if return_distances {
                SearchResult::Distances(ids.into_iter().map(|id| (id, 0)).collect())
            } else {
                SearchResult::Records(ids)
            });
        }

        let distances = match self {
            Index::SingleTrie(t) => search::search_approx(t, &pattern_cp, max_edits as usize),
            Index::FbTrie(fb) => fb.search(&pattern_cp, max_edits as usize),
        };

        Ok(if return_distances {
            SearchResult::Distances(distances)
        } else {
            SearchResult::Records(distances.into_keys().collect())
        })
    }

    /// `true` iff an exact-match search for `pattern` is non-empty.
    pub fn contains(&self, pattern: &str) -> Result<bool, Error> {
        Ok(!self.search(pattern, 0, false)?.is_empty())
    }

    fn forward_trie(&self) -> &Trie {
        match self {
            Index::SingleTrie(t) => t,
            Index::FbTrie(fb) => fb.forward(),
        }
    }

    fn check_budget(&self, pattern_len: usize, max_edits: i32) -> Result<(), Error> {
        match self {
            Index::SingleTrie(_) => Error::check_budget(pattern_len, max_edits),
            Index::FbTrie(_) => {
                // The tail matcher in each two-step pass is allocated the full
                // max_edits budget (the head match may consume none of it), so
                // the binding constraint is the longer half of the split
                // pattern plus the whole budget, not half of it.
                let longer_half = pattern_len - pattern_len / 2;
                if max_edits > nfa::MAX_EDITS || longer_half as i32 + max_edits > nfa::BUDGET {
                    return Err(Error::BudgetExceeded {
                        pattern_len,
                        max_edits,
                        limit: nfa::BUDGET,
                    });
                }
                Ok(())
            }
        }
    }
}

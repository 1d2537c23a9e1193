//! Stress-test companion binary: builds a large randomized dictionary,
//! fires random queries at it through both index variants, and reports
//! result counts and wall-clock time so scaling behavior can be eyeballed
//! without a proper benchmark harness.

use std::time::Instant;

use approxdict::{Index, IndexMethod};
use rand::distributions::{Alphanumeric, Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

const DICTIONARY_SIZE: usize = 20_000;
const QUERY_COUNT: usize = 200;
const MAX_EDITS: i32 = 2;

fn random_word(rng: &mut impl Rng, len_range: &Uniform<usize>) -> String {
    let len = len_range.sample(rng);
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Mutates `word` by a handful of random edits, to produce queries that
/// are likely to actually land near a dictionary entry.
fn perturb(rng: &mut impl Rng, word: &str, edits: usize) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    for _ in 0..edits {
        if chars.is_empty() {
            chars.push(rng.sample(Alphanumeric) as char);
            continue;
        }
        match rng.gen_range(0..3) {
            0 => {
                let i = rng.gen_range(0..chars.len());
                chars[i] = rng.sample(Alphanumeric) as char;
            }
            1 => {
                let i = rng.gen_range(0..chars.len());
                chars.remove(i);
            }
            _ => {
                let i = rng.gen_range(0..=chars.len());
                chars.insert(i, rng.sample(Alphanumeric) as char);
            }
        }
    }
    chars.into_iter().collect()
}

fn run(method: IndexMethod, dictionary: &[String], queries: &[String]) {
    let build_start = Instant::now();
    let index = Index::build(dictionary, method);
    let build_elapsed = build_start.elapsed();

    let search_start = Instant::now();
    let mut total_hits = 0usize;
    for query in queries {
        let result = index
            .search(query, MAX_EDITS, false)
            .expect("query within the supported budget");
        total_hits += result.len();
    }
    let search_elapsed = search_start.elapsed();

    println!(
        "{method:?}: build {:>8.2?} over {} strings, {} queries at k={MAX_EDITS} in {:>8.2?} ({total_hits} total hits)",
        build_elapsed,
        dictionary.len(),
        queries.len(),
        search_elapsed,
    );
}

fn main() {
    let mut rng = StdRng::seed_from_u64(0x6e6f697365);
    let len_range = Uniform::new_inclusive(3, 12);

    let dictionary: Vec<String> = (0..DICTIONARY_SIZE)
        .map(|_| random_word(&mut rng, &len_range))
        .collect();

    let queries: Vec<String> = (0..QUERY_COUNT)
        .map(|_| {
            let base = &dictionary[rng.gen_range(0..dictionary.len())];
            perturb(&mut rng, base, rng.gen_range(0..=2))
        })
        .collect();

    run(IndexMethod::SingleTrie, &dictionary, &queries);
    run(IndexMethod::FbTrie, &dictionary, &queries);
}

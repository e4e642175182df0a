#![cfg(feature = "alloc")]

//! Randomized comparisons against the standard library and `itertools`.

use std::collections::BTreeSet;

use itertools::Itertools;
use pipe_algorithms::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 500;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn random_set(rng: &mut StdRng) -> BTreeSet<u8> {
    let len = rng.gen_range(0..24);
    (0..len).map(|_| rng.gen_range(0..32)).collect()
}

fn random_sorted(rng: &mut StdRng) -> Vec<u8> {
    let len = rng.gen_range(0..24);
    let mut v: Vec<u8> = (0..len).map(|_| rng.gen_range(0..16)).collect();
    v.sort_unstable();
    v
}

#[test]
fn set_algebra_matches_btree_set() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let a = random_set(&mut rng);
        let b = random_set(&mut rng);
        let left = || a.iter().copied();
        let right = || b.iter().copied();

        assert!(left().union(right()).eq(a.union(&b).copied()), "{a:?} | {b:?}");
        assert!(
            left().intersection(right()).eq(a.intersection(&b).copied()),
            "{a:?} & {b:?}"
        );
        assert!(
            left().difference(right()).eq(a.difference(&b).copied()),
            "{a:?} - {b:?}"
        );
        assert!(
            left()
                .symmetric_difference(right())
                .eq(a.symmetric_difference(&b).copied()),
            "{a:?} ^ {b:?}"
        );
    }
}

#[test]
fn merge_matches_itertools() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let a = random_sorted(&mut rng);
        let b = random_sorted(&mut rng);
        let ours = a.iter().merge_sorted(&b);
        let theirs = itertools::merge(&a, &b);
        assert!(ours.eq(theirs), "{a:?} merge {b:?}");
    }
}

#[test]
fn merge_is_stable() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let a: Vec<(u8, char)> = random_sorted(&mut rng).into_iter().map(|n| (n, 'a')).collect();
        let b: Vec<(u8, char)> = random_sorted(&mut rng).into_iter().map(|n| (n, 'b')).collect();
        let by_key = |x: &(u8, char), y: &(u8, char)| x.0.cmp(&y.0);
        let merged: Vec<_> = a.iter().copied().merge_sorted_by(b.iter().copied(), by_key).collect();

        let mut expected: Vec<_> = a.iter().chain(&b).copied().collect();
        expected.sort_by_key(|x| x.0);
        assert_eq!(merged, expected);
    }
}

#[test]
fn dedupe_matches_itertools() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let v = random_sorted(&mut rng);
        assert!(v.iter().dedupe().eq(v.iter().dedup()), "{v:?}");
    }
}

#[test]
fn difference_of_sorted_multisets() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let a = random_sorted(&mut rng);
        let b = random_sorted(&mut rng);
        let mut expected = a.clone();
        for x in &b {
            if let Ok(i) = expected.binary_search(x) {
                expected.remove(i);
            }
        }
        let ours: Vec<u8> = a.iter().copied().difference(b.iter().copied()).collect();
        assert_eq!(ours, expected, "{a:?} - {b:?}");
    }
}

#[test]
fn bounds_compose_like_std() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let v = random_sorted(&mut rng);
        let n: usize = rng.gen_range(0..30);

        assert!(v.iter().take_first(n).eq(v.iter().take(n)));
        assert!(v.iter().drop_first(n).eq(v.iter().skip(n)));

        let padded: Vec<u8> = v.iter().copied().pad_to(n, 0).collect();
        assert_eq!(padded.len(), v.len().max(n));
        assert_eq!(padded[..v.len()], v[..]);
    }
}

#![no_std]

use pipe_algorithms::prelude::*;
use pipe_algorithms::soundex::soundex;

// These tests ensure that the adapters provided by `pipe-algorithms` work in a no std environment.

#[test]
fn concat_tuple() {
    let s = ([1, 2], core::iter::once(3), 4..5).concat();
    assert!(s.eq([1, 2, 3, 4]));
}

#[test]
fn concat_array() {
    let mut s = [[1, 2], [3, 4], [5, 6]].concat();
    assert_eq!(s.next(), Some(1));
    assert!(s.eq([2, 3, 4, 5, 6]));
}

#[test]
fn bounded() {
    let s = (0..).drop_first(2).take_first(3).pad_to(5, -1);
    assert!(s.eq([2, 3, 4, -1, -1]));
}

#[test]
fn filter_and_dedupe() {
    let s = [0, 1, 1, 0, 1, 2].into_iter().filter_truthy().dedupe();
    assert!(s.eq([1, 2]));
}

#[test]
fn sorted_algorithms() {
    assert!([1, 3].into_iter().merge_sorted([2]).eq([1, 2, 3]));
    assert!([1, 3].into_iter().union([2, 3]).eq([1, 2, 3]));
    assert!([1, 3].into_iter().intersection([2, 3]).eq([3]));
    assert!([1, 3].into_iter().difference([2, 3]).eq([1]));
    assert!([1, 3].into_iter().symmetric_difference([2, 3]).eq([1, 2]));
}

#[test]
fn soundex_without_allocating() {
    let mut code = ['\0'; 5];
    for (slot, c) in code.iter_mut().zip(soundex("Oppenheimer".chars())) {
        *slot = c;
    }
    assert_eq!(code, ['O', '-', '1', '5', '5']);
}

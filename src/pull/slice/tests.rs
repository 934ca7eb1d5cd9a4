#![cfg(test)]

use super::*;
use crate::pull::{Pull, Reset};

#[test]
fn test_forward_order() {
    let nums = [1, 2, 3, 4, 5];
    assert_eq!(
        SlicePull::new(&nums).copied().to_vec(),
        [1, 2, 3, 4, 5],
        "Forward collection should equal the source slice."
    );
}

#[test]
fn test_backward_order() {
    let nums = [1, 2, 3, 4, 5];
    assert_eq!(
        RevSlicePull::new(&nums).copied().to_vec(),
        [5, 4, 3, 2, 1],
        "Backward collection should equal the reversed source slice."
    );
}

#[test]
fn test_exhaustion_is_permanent() {
    let nums = [7];
    let mut pull = SlicePull::new(&nums);

    assert_eq!(pull.next(), Some(&7));
    assert_eq!(pull.next(), None);
    assert_eq!(
        pull.next(),
        None,
        "An exhausted cursor should keep reporting exhaustion."
    );
    assert_eq!(
        pull.get(),
        None,
        "An exhausted cursor should have no current element."
    );

    let mut rev = RevSlicePull::new(&nums);
    assert_eq!(rev.next(), Some(&7));
    assert_eq!(rev.next(), None);
    assert_eq!(rev.next(), None);
}

#[test]
fn test_empty_slice() {
    let nums: [u8; 0] = [];
    let mut pull = SlicePull::new(&nums);

    assert_eq!(pull.next(), None, "An empty slice should exhaust immediately.");
    assert_eq!(pull.get(), None);
    assert_eq!(pull.cap(), 0);

    let mut rev = RevSlicePull::new(&nums);
    assert_eq!(rev.next(), None);
    assert_eq!(rev.get(), None);
}

#[test]
fn test_get_without_advancing() {
    let letters = ["a", "b"];
    let mut pull = SlicePull::new(&letters);

    assert_eq!(
        pull.get(),
        None,
        "Before the first pull there should be no current element."
    );

    pull.next();
    assert_eq!(pull.get(), Some(&"a"));
    assert_eq!(
        pull.get(),
        Some(&"a"),
        "Reading the current element shouldn't advance the cursor."
    );

    pull.next();
    assert_eq!(pull.get(), Some(&"b"));
}

#[test]
fn test_cap_is_total_length() {
    let nums = [1, 2, 3];
    let mut pull = SlicePull::new(&nums);

    pull.next();
    pull.next();
    assert_eq!(
        pull.cap(),
        3,
        "Cap should report total length, not a remaining count."
    );
}

#[test]
fn test_reset_rewinds() {
    let nums = [1, 2];
    let mut pull = SlicePull::new(&nums);

    while pull.next().is_some() {}
    assert_eq!(pull.next(), None);

    pull.reset();
    assert_eq!(
        pull.next(),
        Some(&1),
        "Reset should rewind an exhausted cursor to the start."
    );

    let mut rev = RevSlicePull::new(&nums);
    while rev.next().is_some() {}
    rev.reset();
    assert_eq!(rev.next(), Some(&2));
}

#[test]
fn test_from_slice() {
    let nums = [4, 5];
    let pull = SlicePull::from(&nums);
    assert_eq!(pull.copied().to_vec(), [4, 5]);
}

#![cfg(test)]

use crate::pull::bridge::from_iter;
use crate::pull::{Pull, Reset};
use crate::pull::slice::SlicePull;
use crate::util::count::Counted;

#[test]
fn test_convert_preserves_order() {
    let nums = [1, 2, 3];
    assert_eq!(
        SlicePull::new(&nums).convert(|n| n * 10).to_vec(),
        [10, 20, 30],
        "Convert should transform every element in place, in order."
    );
}

#[test]
fn test_filt_then_convert_scenario() {
    let nums = [1, 2, 3, 4, 5, 6];
    assert_eq!(
        SlicePull::new(&nums)
            .filt(|n| **n % 2 == 0)
            .convert(|n| n.to_string())
            .to_vec(),
        ["2", "4", "6"]
    );
}

#[test]
fn test_filt_pulls_upstream_exactly_once_each() {
    let nums = [1, 2, 3, 4, 5, 6];
    let (counted, pulls) = Counted::new(SlicePull::new(&nums));

    assert_eq!(counted.filt(|n| **n % 2 == 0).count(), 3);
    assert_eq!(
        *pulls.borrow(),
        nums.len() + 1,
        "Each upstream element should be pulled exactly once, plus the exhausting pull."
    );
}

#[test]
fn test_filt_rejects_iteratively() {
    // A run of rejections long enough that recursion would overflow the stack.
    let nums: Vec<u32> = (0..100_000).collect();
    assert_eq!(
        SlicePull::new(&nums).filt(|n| **n == 99_999).count(),
        1,
        "A long rejected run should cost pulls, not stack."
    );
}

#[test]
fn test_convert_check_keeps_and_discards() {
    let words = ["4", "four", "17", "seventeen"];
    assert_eq!(
        SlicePull::new(&words)
            .convert_check(|w| w.parse::<u32>().ok())
            .to_vec(),
        [4, 17],
        "Elements the transform rejects should be skipped in one pass."
    );
}

#[test]
fn test_flat_concatenates() {
    let nested = [vec![1, 2, 3], vec![4], vec![5, 6]];
    assert_eq!(
        SlicePull::new(&nested).flat(|v| v.clone()).to_vec(),
        [1, 2, 3, 4, 5, 6]
    );
}

#[test]
fn test_flat_skips_empty_expansions() {
    let nested = [vec![], vec![1], vec![], vec![], vec![2, 3], vec![]];
    assert_eq!(
        SlicePull::new(&nested).flat(|v| v.clone()).to_vec(),
        [1, 2, 3],
        "Empty inner sequences should contribute zero elements, not a gap."
    );

    let all_empty: [Vec<u8>; 3] = [vec![], vec![], vec![]];
    assert_eq!(SlicePull::new(&all_empty).flat(|v| v.clone()).count(), 0);
}

#[test]
fn test_flat_reset_discards_partial_expansion() {
    let nested = [vec![1, 2, 3], vec![4], vec![5, 6]];
    let mut chain = SlicePull::new(&nested).flat(|v| v.clone());

    assert_eq!(chain.next(), Some(1));
    assert_eq!(chain.next(), Some(2));

    chain.reset();
    assert_eq!(
        chain.to_vec(),
        [1, 2, 3, 4, 5, 6],
        "A reset mid-expansion should replay from the start, not resume the drained inner sequence."
    );
}

#[test]
fn test_flat_filt_compositions() {
    let nested = [vec![1, 2], vec![3, 4], vec![5, 6]];

    assert_eq!(
        SlicePull::new(&nested)
            .filt_flat(|v| v[0] != 3, |v| v.clone())
            .to_vec(),
        [1, 2, 5, 6],
        "filt_flat should gate source elements before expansion."
    );
    assert_eq!(
        SlicePull::new(&nested)
            .flat_filt(|v| v.clone(), |n| n % 2 == 0)
            .to_vec(),
        [2, 4, 6],
        "flat_filt should gate expanded elements after expansion."
    );
}

#[test]
fn test_key_values_pairs() {
    let words = ["ab", "c"];
    assert_eq!(
        SlicePull::new(&words).key_values(|w| (w.len(), *w)).to_vec(),
        [(2, "ab"), (1, "c")]
    );
}

#[test]
fn test_multi_key_values_cross_product() {
    let rows = [(vec!["a", "b"], vec![1, 2]), (vec!["c"], vec![3])];

    assert_eq!(
        SlicePull::new(&rows)
            .multi_key_values(|row| row.0.clone(), |row| row.1.clone())
            .to_vec(),
        [("a", 1), ("a", 2), ("b", 1), ("b", 2), ("c", 3)],
        "Each key should be paired with every value, values iterating fastest."
    );
}

#[test]
fn test_multi_key_values_empty_sides() {
    let rows = [
        (vec!["a"], vec![1]),
        (Vec::new(), vec![2, 3]),
        (vec!["b"], Vec::new()),
        (vec!["c"], vec![4]),
    ];

    assert_eq!(
        SlicePull::new(&rows)
            .multi_key_values(|row| row.0.clone(), |row| row.1.clone())
            .to_vec(),
        [("a", 1), ("c", 4)],
        "An element with no keys or no values should contribute no pairs."
    );
}

#[test]
fn test_multi_key_values_reset_discards_partial_product() {
    let rows = [(vec!["a", "b"], vec![1, 2])];
    let mut pairs =
        SlicePull::new(&rows).multi_key_values(|row| row.0.clone(), |row| row.1.clone());

    assert_eq!(pairs.next(), Some(("a", 1)));

    pairs.reset();
    assert_eq!(
        pairs.to_vec(),
        [("a", 1), ("a", 2), ("b", 1), ("b", 2)],
        "A reset mid-product should replay every pair, including those already produced."
    );
}

#[test]
fn test_cloned_and_copied() {
    let words = [String::from("a"), String::from("b")];
    assert_eq!(
        SlicePull::new(&words).cloned().to_vec(),
        [String::from("a"), String::from("b")]
    );

    let nums = [1, 2, 3];
    assert_eq!(SlicePull::new(&nums).copied().to_vec(), [1, 2, 3]);
}

#[test]
fn test_adaptor_exhaustion_is_permanent() {
    let nums = [1, 2];
    let mut chain = SlicePull::new(&nums).convert(|n| n * 2).filt(|n| *n > 2);

    assert_eq!(chain.next(), Some(4));
    assert_eq!(chain.next(), None);
    assert_eq!(
        chain.next(),
        None,
        "An exhausted chain should keep reporting exhaustion."
    );
}

#[test]
fn test_bridges_roundtrip() {
    let doubled: Vec<u32> = from_iter(1..=3).convert(|n| n * 2).iterator().collect();
    assert_eq!(
        doubled,
        [2, 4, 6],
        "A pull chain should drive and be driven by std iterators."
    );

    let mut total = 0;
    for n in from_iter([5, 6, 7]).iterator() {
        total += n;
    }
    assert_eq!(total, 18);
}

use super::*;

fn never_called(_len: usize) -> (usize, usize) {
    panic!("picker must not be consulted for exactly two scores");
}

#[test]
fn test_two_present_values_sum_exactly() {
    let pool = vec![Some(7.0), None, Some(5.0)];
    let mut picker = never_called;
    assert_eq!(select_two(&pool, &mut picker), Some(12.0));
    assert_eq!(select_two(&pool, &mut picker), Some(12.0));
}

#[test]
fn test_fewer_than_two_is_none() {
    let mut picker = never_called;
    assert_eq!(select_two(&[], &mut picker), None);
    assert_eq!(select_two(&[None, Some(3.0), None], &mut picker), None);
}

#[test]
fn test_fixed_pick_indexes_present_values() {
    let pool = vec![Some(5.0), None, Some(6.0), Some(7.0)];
    let mut picker = |len: usize| {
        assert_eq!(len, 3);
        (0, 2)
    };
    assert_eq!(select_two(&pool, &mut picker), Some(12.0));
}

#[test]
fn test_duplicates_still_go_through_picker() {
    let pool = vec![Some(4.0), Some(4.0), Some(4.0)];
    let mut calls = 0usize;
    let mut picker = |_len: usize| {
        calls += 1;
        (1, 2)
    };
    assert_eq!(select_two(&pool, &mut picker), Some(8.0));
    assert_eq!(calls, 1);
}

#[test]
fn test_invalid_pick_is_none() {
    let pool = vec![Some(1.0), Some(2.0), Some(3.0)];
    let mut same = |_len: usize| (1, 1);
    assert_eq!(select_two(&pool, &mut same), None);
    let mut out_of_range = |_len: usize| (0, 3);
    assert_eq!(select_two(&pool, &mut out_of_range), None);
}

#[test]
fn test_random_sum_is_some_present_pair() {
    let pool = vec![Some(1.0), Some(4.0), None, Some(9.0), Some(16.0)];
    let values = present_values(&pool);
    let mut pair_sums = Vec::new();
    for i in 0..values.len() {
        for j in (i + 1)..values.len() {
            pair_sums.push(values[i] + values[j]);
        }
    }

    for seed in 0..200u64 {
        let mut picker = RandomPicker::seeded(seed);
        let sum = select_two(&pool, &mut picker).unwrap();
        assert!(pair_sums.contains(&sum), "seed {seed} produced {sum}");
        assert!((5.0..=25.0).contains(&sum));
    }
}

#[test]
fn test_random_picker_returns_distinct_positions() {
    let mut picker = RandomPicker::seeded(7);
    for len in 3..10 {
        for _ in 0..50 {
            let (a, b) = picker.pick_pair(len);
            assert_ne!(a, b);
            assert!(a < len && b < len);
        }
    }
}

#[test]
fn test_same_seed_same_selection() {
    let pool = vec![Some(2.0), Some(3.0), Some(5.0), Some(8.0)];
    let first = select_two(&pool, &mut RandomPicker::seeded(42));
    let second = select_two(&pool, &mut RandomPicker::seeded(42));
    assert_eq!(first, second);
}

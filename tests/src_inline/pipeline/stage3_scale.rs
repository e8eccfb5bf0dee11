use super::*;

fn table() -> LookupTable {
    [(20, 48), (21, 52), (23, 55), (30, 0)].into_iter().collect()
}

#[test]
fn test_present_keys_return_stored_score() {
    let t = table();
    assert_eq!(scale(&t, 20.0), 48);
    assert_eq!(scale(&t, 21.0), 52);
    assert_eq!(scale(&t, 23.0), 55);
}

#[test]
fn test_stored_zero_is_not_replaced() {
    assert_eq!(scale(&table(), 30.0), 0);
}

#[test]
fn test_absent_key_falls_back_without_interpolation() {
    let t = table();
    assert_eq!(scale(&t, 22.0), FALLBACK_STANDARDIZED);
    assert_eq!(scale(&t, 0.0), 50);
    assert_eq!(scale(&t, 44.0), 50);
}

#[test]
fn test_unkeyable_sums_fall_back() {
    let t = table();
    assert_eq!(scale(&t, 20.5), 50);
    assert_eq!(scale(&t, -1.0), 50);
    assert_eq!(scale(&t, f64::NAN), 50);
    assert_eq!(scale(&t, f64::INFINITY), 50);
}

use imgpress_core::method::CompressionMethod::{Dct, Svd};
use imgpress_core::switch::{resolve_components, ComponentSwitchPolicy};

// ---------------------------------------------------------------------------
// Documented cases
// ---------------------------------------------------------------------------

#[test]
fn test_small_dct_value_resets_to_svd_default() {
    // 15 <= 20 and 15 < 256/3
    assert_eq!(resolve_components(Dct, Svd, 15), 64);
}

#[test]
fn test_small_svd_value_resets_to_dct_default() {
    // 5 <= 256 and 5 < 20/3
    assert_eq!(resolve_components(Svd, Dct, 5), 10);
}

#[test]
fn test_proportionate_value_kept() {
    // 18 fits DCT and is not below 20/3
    assert_eq!(resolve_components(Svd, Dct, 18), 18);
}

// ---------------------------------------------------------------------------
// Branch ordering
// ---------------------------------------------------------------------------

#[test]
fn test_value_above_new_max_resets() {
    assert_eq!(resolve_components(Svd, Dct, 21), 10);
    assert_eq!(resolve_components(Svd, Dct, 200), 10);
}

#[test]
fn test_new_max_itself_is_kept() {
    assert_eq!(resolve_components(Svd, Dct, 20), 20);
}

#[test]
fn test_both_reset_branches_use_new_default() {
    // Divisor so small that every in-range value counts as disproportionate:
    // the out-of-range value gets the default via the first branch, the
    // in-range one via the second.
    let policy = ComponentSwitchPolicy::new(0.001);
    assert_eq!(policy.resolve(Svd, Dct, 100), 10);
    assert_eq!(policy.resolve(Svd, Dct, 19), 10);
}

#[test]
fn test_value_above_old_max_skips_proportion_check() {
    // Not representable under the old method, so the proportion check does
    // not apply even though 30 < 256/3.
    assert_eq!(resolve_components(Dct, Svd, 30), 30);
}

#[test]
fn test_same_method_switch() {
    assert_eq!(resolve_components(Dct, Dct, 3), 10);
    assert_eq!(resolve_components(Dct, Dct, 7), 7);
    assert_eq!(resolve_components(Svd, Svd, 100), 100);
}

#[test]
fn test_resolve_is_deterministic() {
    for current in 1..=256 {
        let a = resolve_components(Svd, Dct, current);
        let b = resolve_components(Svd, Dct, current);
        assert_eq!(a, b);
        assert!(Dct.config().contains(a), "current={current} -> {a}");
    }
}

// ---------------------------------------------------------------------------
// Configurable divisor
// ---------------------------------------------------------------------------

#[test]
fn test_default_policy_divisor_is_three() {
    assert_eq!(ComponentSwitchPolicy::default().proportion_divisor, 3.0);
}

#[test]
fn test_smaller_divisor_resets_more() {
    let policy = ComponentSwitchPolicy::new(1.5);
    // threshold 20 / 1.5 = 13.3
    assert_eq!(policy.resolve(Svd, Dct, 18), 18);
    assert_eq!(policy.resolve(Svd, Dct, 12), 10);
}

use imgpress_core::format::{format_kb, format_kb_value, format_percentage, format_ratio, pluralize};

#[test]
fn test_format_kb_two_decimals() {
    assert_eq!(format_kb(0), "0.00");
    assert_eq!(format_kb(1024), "1.00");
    assert_eq!(format_kb(1536), "1.50");
    assert_eq!(format_kb(12_650), "12.35");
}

#[test]
fn test_format_kb_value() {
    assert_eq!(format_kb_value(0.3333), "0.33");
}

#[test]
fn test_format_ratio() {
    assert_eq!(format_ratio(12.5), "12.50");
    assert_eq!(format_ratio(100.0 / 3.0), "33.33");
    assert_eq!(format_ratio(f64::INFINITY), "inf");
}

#[test]
fn test_format_percentage_one_decimal() {
    assert_eq!(format_percentage(20.0), "20.0");
    assert_eq!(format_percentage(100.0 / 3.0), "33.3");
}

#[test]
fn test_pluralize() {
    assert_eq!(pluralize(1, "", "s"), "");
    assert_eq!(pluralize(0, "", "s"), "s");
    assert_eq!(pluralize(2, "level", "levels"), "levels");
}

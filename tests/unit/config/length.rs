use super::*;
use serde_json::json;

#[test]
fn parses_numbers_and_strings() {
    let l: Length = serde_json::from_value(json!(12)).unwrap();
    assert_eq!(l, Length::Px(12.0));
    let l: Length = serde_json::from_value(json!("12px")).unwrap();
    assert_eq!(l, Length::Px(12.0));
    let l: Length = serde_json::from_value(json!(" 80% ")).unwrap();
    assert_eq!(l, Length::Percent(80.0));
}

#[test]
fn rejects_garbage() {
    assert!(serde_json::from_value::<Length>(json!("wide")).is_err());
    assert!("%".parse::<Length>().is_err());
}

#[test]
fn resolves_against_base() {
    assert_eq!(Length::Percent(50.0).resolve(300.0), 150.0);
    assert_eq!(Length::Px(7.0).resolve(300.0), 7.0);
    assert_eq!(Length::Percent(8.0).to_string(), "8%");
}

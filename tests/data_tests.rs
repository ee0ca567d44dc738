// Host-side tests for dataset parsing.

use triswap_core::{parse_dataset, swap_base_height, DataError, DataItem, DATASET_LEN};

#[test]
fn bundled_dataset_has_ten_records() {
    let items = parse_dataset(include_str!("../data.json")).expect("valid dataset");
    assert_eq!(items.len(), DATASET_LEN);
    assert!(items.iter().all(|d| d.base > 0.0 && d.height > 0.0));
}

#[test]
fn parses_records_and_ignores_extra_fields() {
    let json = r#"[
        {"x": 1, "y": 2.5, "base": 3, "height": 4, "hue": 90, "label": "a"},
        {"x": -1, "y": 0, "base": 7, "height": 8, "hue": 180}
    ]"#;
    let items = parse_dataset(json).expect("valid");
    assert_eq!(
        items[0],
        DataItem {
            x: 1.0,
            y: 2.5,
            base: 3.0,
            height: 4.0,
            hue: 90.0
        }
    );
    assert_eq!(items[1].x, -1.0);
}

#[test]
fn empty_array_is_rejected() {
    assert!(matches!(parse_dataset("[]"), Err(DataError::Empty)));
}

#[test]
fn malformed_input_is_a_json_error() {
    for bad in [
        "",
        "{}",
        r#"[{"x": 1, "y": 2, "base": 3, "height": 4}]"#,
        r#"[{"x": "1", "y": 2, "base": 3, "height": 4, "hue": 5}]"#,
    ] {
        assert!(
            matches!(parse_dataset(bad), Err(DataError::Json(_))),
            "{:?}",
            bad
        );
    }
}

#[test]
fn error_messages_name_the_problem() {
    let err = DataError::NonFinite {
        index: 3,
        field: "base",
    };
    let msg = err.to_string();
    assert!(msg.contains('3') && msg.contains("base"), "{}", msg);
}

#[test]
fn swap_ignores_self_and_out_of_range() {
    let original = vec![
        DataItem {
            base: 1.0,
            height: 2.0,
            ..Default::default()
        },
        DataItem {
            base: 3.0,
            height: 4.0,
            ..Default::default()
        },
    ];
    let mut items = original.clone();
    swap_base_height(&mut items, 1, 1);
    swap_base_height(&mut items, 0, 2);
    assert_eq!(items, original);

    swap_base_height(&mut items, 1, 0);
    assert_eq!((items[0].base, items[0].height), (3.0, 4.0));
    assert_eq!((items[1].base, items[1].height), (1.0, 2.0));
}

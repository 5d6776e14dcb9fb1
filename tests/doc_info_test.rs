// DocInfo deserialization and effective staff/beat lookups

use ema_wasm::{Completeness, DocInfo, TimeSignature};

#[test]
fn test_from_json() {
    let info = DocInfo::from_json(
        r#"{
            "measures": 12,
            "measure_labels": ["1", "2", "2a"],
            "staves": { "0": ["Violin", "Piano"], "8": ["Violin"] },
            "beats": { "0": { "count": 3, "unit": 4 }, "10": { "count": 2, "unit": 2 } },
            "completeness": "signature"
        }"#,
    )
    .expect("should parse");

    assert_eq!(info.measures, 12);
    assert_eq!(info.completeness, Some(Completeness::Signature));
    assert_eq!(info.measure_label(3), Some("2a"));

    assert_eq!(info.staff_count_at(8), 2);
    assert_eq!(info.staff_count_at(9), 1);
    assert_eq!(info.staves_at(9), &["Violin".to_string()]);

    assert_eq!(info.time_signature_at(10), TimeSignature::new(3, 4));
    assert_eq!(info.time_signature_at(11), TimeSignature::new(2, 2));
}

#[test]
fn test_beat_unit_defaults() {
    let info = DocInfo::from_json(
        r#"{ "measures": 1, "staves": { "0": ["A"] }, "beats": { "0": { "count": 5 } } }"#,
    )
    .unwrap();
    assert_eq!(info.time_signature_at(1), TimeSignature::new(5, 4));
}

#[test]
fn test_invalid_documents() {
    // Missing baseline map
    assert!(DocInfo::from_json(r#"{ "measures": 1, "staves": {}, "beats": { "0": { "count": 4 } } }"#).is_err());
    // Non-numeric change key
    assert!(DocInfo::from_json(r#"{ "measures": 1, "staves": { "first": ["A"] }, "beats": { "0": { "count": 4 } } }"#).is_err());
    // Unknown completeness
    assert!(DocInfo::from_json(
        r#"{ "measures": 1, "staves": { "0": ["A"] }, "beats": { "0": { "count": 4 } }, "completeness": "partial" }"#
    )
    .is_err());
}

#[test]
fn test_json_round_trip() {
    let info = DocInfo::new(6, vec!["Flute".to_string(), "Oboe".to_string()], TimeSignature::new(4, 4))
        .with_staff_change(3, vec!["Flute".to_string()])
        .with_completeness(Completeness::Highlight);

    let json = serde_json::to_string(&info).unwrap();
    assert!(json.contains(r#""staves":{"0":["Flute","Oboe"],"3":["Flute"]}"#));
    assert!(!json.contains("measure_labels"));
    assert_eq!(DocInfo::from_json(&json).unwrap(), info);
}

use tracelens_core::{Finding, FindingCategory, Relationship, Severity};

fn breach() -> Finding {
    Finding {
        id: 2,
        category: FindingCategory::Breach,
        value: "Collection #1 (2019)".to_string(),
        source: "HaveIBeenPwned API".to_string(),
        timestamp_ms: 1_546_819_200_000,
        description: "Email found in major data breach compilation".to_string(),
        severity: Some(Severity::High),
        url: Some("https://haveibeenpwned.com/".to_string()),
        confidence: 95,
    }
}

#[test]
fn finding_serialization_uses_expected_wire_fields() {
    let json = serde_json::to_value(breach()).unwrap();
    assert_eq!(json["id"], 2);
    assert_eq!(json["type"], "breach");
    assert_eq!(json["severity"], "high");
    assert_eq!(json["timestamp_ms"], 1_546_819_200_000_i64);
    assert_eq!(json["confidence"], 95);

    let decoded: Finding = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, breach());
}

#[test]
fn input_finding_serializes_missing_severity_as_null() {
    let mut finding = breach();
    finding.category = FindingCategory::Email;
    finding.severity = None;
    finding.url = None;

    let json = serde_json::to_value(&finding).unwrap();
    assert_eq!(json["type"], "email");
    assert!(json["severity"].is_null());
    assert!(json["url"].is_null());
}

#[test]
fn deserialize_rejects_unknown_category() {
    let value = serde_json::json!({
        "id": 1,
        "type": "satellite",
        "value": "x",
        "source": "Input",
        "timestamp_ms": 0,
        "description": "",
        "severity": null,
        "url": null,
        "confidence": 100
    });

    let err = serde_json::from_value::<Finding>(value).unwrap_err();
    assert!(err.to_string().contains("satellite"), "unexpected error: {err}");
}

#[test]
fn relationship_touches_either_endpoint() {
    let relationship = Relationship {
        from_id: 1,
        to_id: 4,
        label: "belongs_to_domain".to_string(),
        strength: 1.0,
    };
    assert!(relationship.touches(1));
    assert!(relationship.touches(4));
    assert!(!relationship.touches(2));
    assert!(relationship.validate().is_ok());
}

#[test]
fn severity_orders_by_risk() {
    assert!(Severity::Low < Severity::Medium);
    assert!(Severity::High < Severity::Critical);
    assert!(Severity::Critical.is_high_risk());
    assert!(!Severity::Medium.is_high_risk());
}

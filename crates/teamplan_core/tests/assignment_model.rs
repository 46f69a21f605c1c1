use chrono::{NaiveDate, TimeZone, Utc};
use teamplan_core::{Assignment, Person};
use uuid::Uuid;

#[test]
fn assignment_serialization_uses_expected_wire_fields() {
    let assignment = Assignment {
        uuid: Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap(),
        person_uuid: Uuid::parse_str("00000000-0000-4000-8000-000000000001").unwrap(),
        task_uuid: Uuid::parse_str("00000000-0000-4000-8000-000000000002").unwrap(),
        schedule_uuid: Uuid::parse_str("00000000-0000-4000-8000-000000000003").unwrap(),
        start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
        created_on: Utc.with_ymd_and_hms(2025, 3, 28, 9, 30, 0).unwrap(),
        updated_on: None,
    };

    let json = serde_json::to_value(&assignment).unwrap();
    assert_eq!(json["uuid"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["person_uuid"], "00000000-0000-4000-8000-000000000001");
    assert_eq!(json["task_uuid"], "00000000-0000-4000-8000-000000000002");
    assert_eq!(
        json["schedule_uuid"],
        "00000000-0000-4000-8000-000000000003"
    );
    assert_eq!(json["start_date"], "2025-04-01");
    assert_eq!(json["end_date"], "2025-04-30");
    assert_eq!(json["updated_on"], serde_json::Value::Null);

    let decoded: Assignment = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, assignment);
}

#[test]
fn person_classification_serializes_as_type() {
    let person = Person {
        uuid: Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        rank: "senior".to_string(),
        kind: "member".to_string(),
        created_on: Utc.with_ymd_and_hms(2025, 3, 28, 9, 30, 0).unwrap(),
        updated_on: None,
    };

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["type"], "member");
    assert!(json.get("kind").is_none());

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}

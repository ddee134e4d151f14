use super::*;
use serde_json::json;

#[test]
fn test_record_type_wire_names() {
    let row: RecordTypeDescriptor = serde_json::from_value(json!({
        "id": "012A0000000AbcD",
        "developerName": "Partner",
        "ownerEntityType": "Account"
    }))
    .unwrap();

    assert_eq!(row.id, "012A0000000AbcD");
    assert_eq!(row.developer_name, "Partner");
    assert_eq!(row.owner_entity_type, "Account");

    // Round-trips back to camelCase wire names
    let wire = serde_json::to_value(&row).unwrap();
    assert_eq!(wire["developerName"], "Partner");
    assert_eq!(wire["ownerEntityType"], "Account");
}

#[test]
fn test_query_response_typed_records() {
    let response: QueryResponse = serde_json::from_value(json!({
        "totalSize": 2,
        "done": true,
        "records": [
            {"id": "012A", "developerName": "Partner", "ownerEntityType": "Account"},
            {"id": "012B", "developerName": "Customer", "ownerEntityType": "Account"}
        ]
    }))
    .unwrap();

    assert_eq!(response.total_size, 2);
    assert!(response.done);
    assert!(response.error.is_none());

    let rows: Vec<RecordTypeDescriptor> = response.typed_records().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].developer_name, "Customer");
}

#[test]
fn test_query_response_defaults() {
    // A minimal body still parses; done defaults to true
    let response: QueryResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(response.total_size, 0);
    assert!(response.done);
    assert!(response.records.is_empty());
}

#[test]
fn test_query_response_error_detail() {
    let response: QueryResponse = serde_json::from_value(json!({
        "totalSize": 0,
        "records": [],
        "error": {"errorCode": "INVALID_QUERY", "message": "unknown field 'actve'"}
    }))
    .unwrap();

    let error = response.error.unwrap();
    assert_eq!(error.error_code, "INVALID_QUERY");
    assert_eq!(error.message, "unknown field 'actve'");
}

#[test]
fn test_typed_records_shape_mismatch() {
    let response: QueryResponse = serde_json::from_value(json!({
        "totalSize": 1,
        "records": [{"id": "012A"}]
    }))
    .unwrap();

    let result: crate::error::Result<Vec<RecordTypeDescriptor>> = response.typed_records();
    assert!(result.is_err());
}

#[test]
fn test_query_request_wire_shape() {
    let request = QueryRequest {
        query: "SELECT id FROM RecordType".to_string(),
    };
    let wire = serde_json::to_value(&request).unwrap();
    assert_eq!(wire, json!({"query": "SELECT id FROM RecordType"}));
}

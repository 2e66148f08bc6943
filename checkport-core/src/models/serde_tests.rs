//! Serde tests for API-shaped payloads.
//!
//! These tests feed payloads shaped like the list and detail endpoints into
//! the core types and check that each lands in the right variant.

use serde_json::json;

use crate::{
    CheckTypeVariant, TransactionCheck, TransactionChecksResponse, UptimeCheck,
    UptimeChecksResponse,
};

// ============================================================================
// Uptime Checks
// ============================================================================

#[test]
fn test_list_payload_resolves_to_raw_label() {
    let response: UptimeChecksResponse = serde_json::from_value(json!({
        "checks": [
            {
                "id": 85975,
                "name": "My check 1",
                "hostname": "example.com",
                "status": "up",
                "resolution": 1,
                "type": "http",
                "lasttesttime": 1297446423,
                "tags": [{ "name": "apache", "type": "a", "count": 2 }]
            },
            {
                "id": 161748,
                "name": "My check 2",
                "hostname": "mydomain.com",
                "status": "paused",
                "resolution": 5,
                "type": "ping"
            }
        ],
        "counts": { "total": 2, "limited": 2, "filtered": 2 }
    }))
    .unwrap();

    assert_eq!(response.checks.len(), 2);
    assert_eq!(
        response.checks[0].check_type,
        CheckTypeVariant::RawLabel("http".to_string())
    );
    assert!(!response.checks[1].check_type.is_detail());
    assert_eq!(response.checks[0].tags[0].name, "apache");
    assert_eq!(response.counts.unwrap().total, 2);
}

#[test]
fn test_detail_payload_resolves_to_detail_object() {
    let check: UptimeCheck = serde_json::from_value(json!({
        "id": 85975,
        "name": "My check 7",
        "hostname": "s7.mydomain.com",
        "status": "up",
        "resolution": 1,
        "type": {
            "http": {
                "url": "/",
                "encryption": false,
                "port": 80,
                "requestheaders": { "User-Agent": "Pingdom.com_bot_version_1.4" }
            }
        },
        "teamids": [1, 2]
    }))
    .unwrap();

    assert!(check.check_type.is_detail());
    assert_eq!(check.check_type.label(), None);
    assert_eq!(check.check_type.lookup_str("http", "url"), Some("/"));
    assert_eq!(check.teamids, vec![1, 2]);
}

#[test]
fn test_missing_type_defaults_to_empty_label() {
    let check: UptimeCheck = serde_json::from_value(json!({ "id": 1 })).unwrap();
    assert_eq!(check.check_type, CheckTypeVariant::default());
    assert!(check.name.is_empty());
}

#[test]
fn test_numeric_type_is_rejected() {
    let result: Result<UptimeCheck, _> = serde_json::from_value(json!({ "id": 1, "type": 3 }));
    assert!(result.is_err());
}

#[test]
fn test_uptime_check_serializes_api_names() {
    let check = UptimeCheck {
        id: 5,
        check_type: CheckTypeVariant::RawLabel("tcp".into()),
        probe_filters: vec!["region: NA".into()],
        ..Default::default()
    };
    let value = serde_json::to_value(&check).unwrap();

    assert_eq!(value["type"], "tcp");
    assert_eq!(value["probe_filters"][0], "region: NA");
    assert!(value.get("check_type").is_none());
}

#[test]
fn test_uptime_field_order_is_declaration_order() {
    let value = serde_json::to_value(UptimeCheck::default()).unwrap();
    let keys: Vec<_> = value.as_object().unwrap().keys().take(4).cloned().collect();
    assert_eq!(keys, ["id", "name", "hostname", "status"]);
}

// ============================================================================
// Transaction Checks
// ============================================================================

#[test]
fn test_transaction_list_payload() {
    let response: TransactionChecksResponse = serde_json::from_value(json!({
        "checks": [
            { "id": 1, "name": "Login", "active": true, "status": "successful", "interval": 10,
              "region": "us-east", "tags": ["prod"], "type": ["script"] },
            { "id": 2, "name": "Checkout", "active": false, "status": "failing" }
        ],
        "limit": 1000,
        "offset": 0
    }))
    .unwrap();

    assert_eq!(response.checks.len(), 2);
    assert_eq!(response.limit, 1000);
    assert_eq!(response.checks[0].check_type, ["script"]);
    assert!(response.checks[1].steps.is_empty());
}

#[test]
fn test_transaction_detail_payload() {
    let check: TransactionCheck = serde_json::from_value(json!({
        "id": 42,
        "name": "Signup flow",
        "interval": 10,
        "severity_level": "high",
        "steps": [{ "fn": "go_to", "args": { "url": "https://example.com" }, "contains_navigate": true }],
        "team_ids": [3],
        "contact_ids": [9],
        "last_downtime_start": null
    }))
    .unwrap();

    assert_eq!(check.steps[0].contains_navigate, Some(true));
    assert_eq!(check.last_downtime_start, None);
    assert_eq!(check.contact_ids, vec![9]);
}

#[test]
fn test_empty_responses_default() {
    let uptime: UptimeChecksResponse = serde_json::from_value(json!({})).unwrap();
    assert!(uptime.checks.is_empty());
    assert!(uptime.counts.is_none());

    let tms: TransactionChecksResponse = serde_json::from_value(json!({})).unwrap();
    assert!(tms.checks.is_empty());
}

// ============================================================================
// Explicit nulls
// ============================================================================

#[test]
fn test_uptime_list_with_null_fields() {
    let response: UptimeChecksResponse = serde_json::from_value(json!({
        "checks": [{
            "id": 7,
            "name": null,
            "hostname": "example.com",
            "custom_message": null,
            "tags": null,
            "teamids": null,
            "lasttesttime": null,
            "type": "http"
        }],
        "counts": { "total": 1, "limited": null, "filtered": 1 }
    }))
    .unwrap();

    let check = &response.checks[0];
    assert!(check.name.is_empty());
    assert!(check.custom_message.is_empty());
    assert!(check.tags.is_empty());
    assert!(check.teamids.is_empty());
    assert_eq!(response.counts.unwrap().limited, 0);
}

#[test]
fn test_transaction_list_with_null_fields() {
    let response: TransactionChecksResponse = serde_json::from_value(json!({
        "checks": [{
            "id": 3,
            "name": "Login",
            "custom_message": null,
            "tags": null,
            "type": null,
            "active": null
        }],
        "limit": 1000,
        "offset": null
    }))
    .unwrap();

    let check = &response.checks[0];
    assert!(check.custom_message.is_empty());
    assert!(check.tags.is_empty());
    assert!(check.check_type.is_empty());
    assert!(!check.active);
    assert_eq!(response.offset, 0);
}

#[test]
fn test_null_checks_list_reads_as_empty() {
    let uptime: UptimeChecksResponse = serde_json::from_value(json!({ "checks": null })).unwrap();
    assert!(uptime.checks.is_empty());

    let tms: TransactionChecksResponse = serde_json::from_value(json!({ "checks": null })).unwrap();
    assert!(tms.checks.is_empty());
}

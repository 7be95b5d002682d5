use super::*;

fn sample_record() -> AdvertisementRecord {
    AdvertisementRecord {
        id: "1".to_owned(),
        name: "Advert1".to_owned(),
        kind: AdvertisementKind::Popup,
        start_date: "2023-01-01".to_owned(),
        end_date: "2023-02-01".to_owned(),
        media_url: String::new(),
        organization_id: "1".to_owned(),
    }
}

// =============================================================
// AdvertisementKind
// =============================================================

#[test]
fn kind_serializes_to_wire_strings() {
    assert_eq!(serde_json::to_value(AdvertisementKind::Popup).unwrap(), "POPUP");
    assert_eq!(serde_json::to_value(AdvertisementKind::Banner).unwrap(), "BANNER");
}

#[test]
fn kind_parse_round_trips_known_values() {
    assert_eq!(AdvertisementKind::parse("POPUP"), Some(AdvertisementKind::Popup));
    assert_eq!(AdvertisementKind::parse("BANNER"), Some(AdvertisementKind::Banner));
    assert_eq!(AdvertisementKind::parse("INTERSTITIAL"), None);
    assert_eq!(AdvertisementKind::parse(""), None);
}

#[test]
fn kind_display_matches_as_str() {
    assert_eq!(AdvertisementKind::Popup.to_string(), "POPUP");
    assert_eq!(AdvertisementKind::Banner.to_string(), "BANNER");
}

// =============================================================
// AdvertisementRecord
// =============================================================

#[test]
fn record_deserializes_from_wire_casing() {
    let json = serde_json::json!({
        "_id": "1",
        "name": "Advert1",
        "type": "POPUP",
        "startDate": "2023-01-01",
        "endDate": "2023-02-01",
        "mediaUrl": "data:videos",
        "organizationId": "1"
    });
    let record: AdvertisementRecord = serde_json::from_value(json).unwrap();
    assert_eq!(record.id, "1");
    assert_eq!(record.kind, AdvertisementKind::Popup);
    assert_eq!(record.media_url, "data:videos");
    assert!(record.has_media());
}

#[test]
fn record_defaults_fields_mutation_responses_omit() {
    // Update responses carry no organizationId and may omit mediaUrl.
    let json = serde_json::json!({
        "_id": "1",
        "name": "Updated Advertisement",
        "type": "BANNER",
        "startDate": "2023-01-02",
        "endDate": "2023-01-03"
    });
    let record: AdvertisementRecord = serde_json::from_value(json).unwrap();
    assert_eq!(record.organization_id, "");
    assert_eq!(record.media_url, "");
    assert!(!record.has_media());
}

// =============================================================
// Update variables (partial-update contract)
// =============================================================

#[test]
fn update_variables_skip_unchanged_fields() {
    let vars = UpdateAdvertisementVariables {
        id: "1".to_owned(),
        name: Some("Updated Advertisement".to_owned()),
        kind: Some(AdvertisementKind::Banner),
        start_date: None,
        end_date: None,
    };
    let value = serde_json::to_value(&vars).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 3);
    assert!(keys.contains(&"id"));
    assert!(keys.contains(&"name"));
    assert!(keys.contains(&"type"));
    assert_eq!(value["type"], "BANNER");
}

#[test]
fn update_variables_id_only_serializes_single_key() {
    let vars = UpdateAdvertisementVariables {
        id: "-100".to_owned(),
        ..UpdateAdvertisementVariables::default()
    };
    assert!(vars.is_id_only());
    let value = serde_json::to_value(&vars).unwrap();
    assert_eq!(value, serde_json::json!({ "id": "-100" }));
}

#[test]
fn create_variables_use_file_key_for_media() {
    let vars = CreateAdvertisementVariables {
        organization_id: "1".to_owned(),
        name: "Updated Advertisement".to_owned(),
        file: String::new(),
        kind: AdvertisementKind::Banner,
        start_date: "2023-01-01".to_owned(),
        end_date: "2023-02-01".to_owned(),
    };
    let value = serde_json::to_value(&vars).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "organizationId": "1",
            "name": "Updated Advertisement",
            "file": "",
            "type": "BANNER",
            "startDate": "2023-01-01",
            "endDate": "2023-02-01"
        })
    );
}

// =============================================================
// Response envelopes
// =============================================================

#[test]
fn update_response_parses_well_formed_payload() {
    let json = serde_json::json!({
        "data": {
            "updateAdvertisement": {
                "advertisement": {
                    "_id": "1",
                    "name": "Updated Advertisement",
                    "type": "BANNER",
                    "startDate": "2023-01-02",
                    "endDate": "2023-01-03",
                    "mediaUrl": ""
                }
            }
        }
    });
    let resp: UpdateAdvertisementResponse = serde_json::from_value(json).unwrap();
    let record = resp.data.unwrap().update_advertisement.advertisement;
    assert_eq!(record.name, "Updated Advertisement");
    assert_eq!(record.kind, AdvertisementKind::Banner);
}

#[test]
fn update_response_tolerates_missing_data() {
    // Degenerate success body with no `data` envelope at all.
    let json = serde_json::json!({
        "updateAdvertisement": { "_id": "1", "name": "Updated Advertisement", "type": "BANNER" }
    });
    let resp: UpdateAdvertisementResponse = serde_json::from_value(json).unwrap();
    assert!(resp.data.is_none());
}

#[test]
fn create_response_parses_new_id() {
    let json = serde_json::json!({
        "data": { "createAdvertisement": { "_id": "1" } }
    });
    let resp: CreateAdvertisementResponse = serde_json::from_value(json).unwrap();
    assert_eq!(resp.data.unwrap().create_advertisement.id, "1");
}

#[test]
fn create_response_tolerates_misnamed_envelope() {
    // The backend once shipped `data1` — anything but `data` means no id.
    let json = serde_json::json!({
        "data1": { "createAdvertisement": { "_id": "1" } }
    });
    let resp: CreateAdvertisementResponse = serde_json::from_value(json).unwrap();
    assert!(resp.data.is_none());
}

#[test]
fn sample_record_has_no_media_when_url_empty() {
    assert!(!sample_record().has_media());
}

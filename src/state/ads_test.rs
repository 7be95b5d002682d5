use super::*;
use crate::net::types::AdvertisementKind;

fn ad(id: &str, name: &str) -> AdvertisementRecord {
    AdvertisementRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        kind: AdvertisementKind::Popup,
        start_date: "2023-01-01".to_owned(),
        end_date: "2023-02-01".to_owned(),
        media_url: String::new(),
        organization_id: "1".to_owned(),
    }
}

#[test]
fn default_list_is_empty() {
    assert!(AdsState::default().items.is_empty());
}

#[test]
fn remove_ad_drops_only_the_matching_record() {
    let mut state = AdsState {
        items: vec![ad("1", "Advert1"), ad("2", "Advert2")],
    };
    state.remove_ad("1");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "2");
}

#[test]
fn remove_ad_ignores_unknown_id() {
    let mut state = AdsState {
        items: vec![ad("1", "Advert1")],
    };
    state.remove_ad("404");
    assert_eq!(state.items.len(), 1);
}

#[test]
fn replace_ad_updates_matching_record_in_place() {
    let mut state = AdsState {
        items: vec![ad("1", "Advert1"), ad("2", "Advert2")],
    };
    state.replace_ad(ad("2", "Renamed"));
    assert_eq!(state.items[1].name, "Renamed");
    assert_eq!(state.items[0].name, "Advert1");
}

#[test]
fn replace_ad_ignores_unknown_id() {
    let mut state = AdsState {
        items: vec![ad("1", "Advert1")],
    };
    state.replace_ad(ad("404", "Ghost"));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].name, "Advert1");
}

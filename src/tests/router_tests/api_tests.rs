use crate::domain::{PriceBucket, SelectorPair, TransitBucket};
use crate::router::handle;
use crate::tests::utils::{
    body_string, listing_row, request, selected, state_with_rows, uri_for,
};
use http::Method;

fn view_json(uri: &str) -> serde_json::Value {
    let state = state_with_rows(vec![
        listing_row("東京都千代田区丸の内2-1", "18万円", "35.681", "139.764", TransitBucket::High, PriceBucket::Tier2),
        listing_row("東京都中央区八重洲1-5", "", "35.680", "", TransitBucket::High, PriceBucket::Tier2),
    ]);

    let resp = handle(request(Method::GET, uri, None), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );
    serde_json::from_str(&body_string(resp)).unwrap()
}

#[test]
fn inactive_state_has_no_payload() {
    let json = view_json("/api/view");
    assert_eq!(json, serde_json::json!({ "state": "inactive" }));
}

#[test]
fn active_empty_state_is_tagged() {
    let json = view_json(&uri_for(
        "/api/view",
        &SelectorPair::new(TransitBucket::Low, PriceBucket::Tier1),
    ));
    assert_eq!(json["state"], "active_empty");
}

#[test]
fn nonempty_state_carries_markers_and_table() {
    let json = view_json(&uri_for("/api/view", &selected()));

    assert_eq!(json["state"], "active_nonempty");
    assert_eq!(json["map"]["status"], "mappable");
    assert_eq!(json["map"]["listings"].as_array().unwrap().len(), 1);
    assert_eq!(json["map"]["listings"][0]["kind"], "listing");
    assert_eq!(json["map"]["listings"][0]["icon"]["color"], "blue");
    assert_eq!(json["map"]["reference"]["kind"], "reference");

    let rows = json["table"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["ordinal"], 1);
    assert_eq!(rows[1]["ordinal"], 2);
    assert_eq!(rows[1]["rent"], "");
    assert_eq!(json["table"]["columns"][2], "賃料(万円)");
    assert!(json["full_table"].is_null());
}

#[test]
fn healthz_answers_ok() {
    let state = state_with_rows(vec![]);
    let resp = handle(request(Method::GET, "/healthz", None), &state).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}

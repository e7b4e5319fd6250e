use crate::domain::{PriceBucket, TransitBucket};
use crate::router::{handle, AppState};
use crate::templates::pages::selection_query;
use crate::tests::utils::{
    body_string, listing_row, request, selected, session_cookie, state_with_rows, uri_for,
};
use http::Method;

fn two_listings() -> AppState {
    state_with_rows(vec![
        listing_row("東京都千代田区丸の内2-1", "18万円", "35.681", "139.764", TransitBucket::High, PriceBucket::Tier2),
        listing_row("東京都目黒区自由が丘1-9", "24万円", "35.607", "139.668", TransitBucket::Mid, PriceBucket::Tier3),
    ])
}

fn toggle(state: &AppState, cookie: Option<&str>) -> (String, Option<String>) {
    let resp = handle(
        request(Method::POST, &uri_for("/toggle-show-all", &selected()), cookie),
        state,
    )
    .expect("toggle failed");

    assert_eq!(resp.status(), 303);
    let location = resp
        .headers()
        .get("Location")
        .expect("redirect target")
        .to_str()
        .unwrap()
        .to_string();
    (location, session_cookie(&resp))
}

fn page(state: &AppState, cookie: &str) -> String {
    let resp = handle(request(Method::GET, &uri_for("/", &selected()), Some(cookie)), state)
        .expect("Handler failed");
    body_string(resp)
}

#[test]
fn toggle_redirects_back_with_selection() {
    let state = two_listings();

    let (location, cookie) = toggle(&state, None);

    assert_eq!(location, format!("/?{}", selection_query(&selected())));
    assert!(cookie.is_some(), "first toggle starts a session");
}

#[test]
fn show_all_lists_unfiltered_records() {
    let state = two_listings();
    let (_, cookie) = toggle(&state, None);
    let cookie = cookie.unwrap();

    let body = page(&state, &cookie);

    assert!(body.contains(r#"id="all-listings""#));
    assert!(body.contains("東京都目黒区自由が丘1-9"));
}

#[test]
fn second_toggle_hides_them_again() {
    let state = two_listings();
    let (_, cookie) = toggle(&state, None);
    let cookie = cookie.unwrap();

    let (_, reissued) = toggle(&state, Some(&cookie));
    assert!(reissued.is_none());

    let body = page(&state, &cookie);
    assert!(!body.contains(r#"id="all-listings""#));
    assert!(!body.contains("東京都目黒区自由が丘1-9"));
}

#[test]
fn toggle_does_not_leak_between_sessions() {
    let state = two_listings();
    let (_, cookie) = toggle(&state, None);
    assert!(cookie.is_some());

    let fresh = handle(request(Method::GET, &uri_for("/", &selected()), None), &state)
        .expect("Handler failed");

    assert!(!body_string(fresh).contains(r#"id="all-listings""#));
}

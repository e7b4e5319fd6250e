use crate::domain::{PriceBucket, SelectorPair, TransitBucket};
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use crate::templates::pages::listings::{NO_MAPPABLE_MESSAGE, NO_MATCH_MESSAGE, TABLE_HEADING};
use crate::tests::utils::{
    body_string, embedded_map, listing_row, request, selected, session_cookie, state_with_rows,
    uri_for, FailingSource,
};
use http::Method;

fn get_page(state: &AppState, selectors: &SelectorPair) -> String {
    let resp = handle(request(Method::GET, &uri_for("/", selectors), None), state)
        .expect("Handler failed");
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

#[test]
fn three_rows_give_three_table_rows_and_two_markers() {
    let state = state_with_rows(vec![
        listing_row("東京都千代田区丸の内2-1", "18万円", "35.681", "139.764", TransitBucket::High, PriceBucket::Tier2),
        listing_row("東京都中央区八重洲1-5", "", "35.680", "139.770", TransitBucket::High, PriceBucket::Tier2),
        listing_row("東京都港区芝公園4-2", "12万円", "35.658", "", TransitBucket::High, PriceBucket::Tier2),
    ]);

    let body = get_page(&state, &selected());

    assert!(body.contains(TABLE_HEADING));
    assert!(body.contains("<td>18万円</td>"));
    assert!(body.contains("<td>12万円</td>"));
    assert!(body.contains("<td></td>"), "blank rent cell expected");
    assert!(body.contains("<td>3</td>"));
    assert!(!body.contains("<td>4</td>"));

    let map = embedded_map(&body).expect("map payload missing");
    assert_eq!(map["listings"].as_array().unwrap().len(), 2);
    assert_eq!(map["reference"]["popup"], "丸の内");
    assert_eq!(map["reference_area"]["radius_m"], 500.0);
}

#[test]
fn links_render_as_anchors() {
    let state = state_with_rows(vec![listing_row(
        "東京都新宿区西新宿2-8",
        "20万円",
        "35.689",
        "139.691",
        TransitBucket::High,
        PriceBucket::Tier2,
    )]);

    let body = get_page(&state, &selected());

    assert!(body.contains(r#"<a target="_blank" href="https://example.com/"#));
}

#[test]
fn unselected_shows_only_the_selectors() {
    let state = state_with_rows(vec![listing_row(
        "東京都千代田区丸の内2-1",
        "18万円",
        "35.681",
        "139.764",
        TransitBucket::High,
        PriceBucket::Tier2,
    )]);

    let body = get_page(
        &state,
        &SelectorPair::new(TransitBucket::High, PriceBucket::Unselected),
    );

    assert!(body.contains(r#"name="transit""#));
    assert!(!body.contains(TABLE_HEADING));
    assert!(!body.contains(NO_MATCH_MESSAGE));
    assert!(embedded_map(&body).is_none());
}

#[test]
fn no_rows_with_selection_shows_no_match() {
    let state = state_with_rows(vec![]);

    let body = get_page(&state, &selected());

    assert!(body.contains(NO_MATCH_MESSAGE));
    assert!(!body.contains(TABLE_HEADING));
    assert!(embedded_map(&body).is_none());
}

#[test]
fn matches_without_coordinates_show_table_but_no_map() {
    let state = state_with_rows(vec![listing_row(
        "東京都品川区大崎1-1",
        "15万円",
        "",
        "",
        TransitBucket::High,
        PriceBucket::Tier2,
    )]);

    let body = get_page(&state, &selected());

    assert!(body.contains(NO_MAPPABLE_MESSAGE));
    assert!(body.contains(TABLE_HEADING));
    assert!(embedded_map(&body).is_none());
}

#[test]
fn selected_options_stay_checked() {
    let state = state_with_rows(vec![]);

    let body = get_page(&state, &selected());

    assert!(body.contains(r#"value="とても多い(15本～)" checked"#));
    assert!(body.contains(r#"value="20万円以内" checked"#));
}

#[test]
fn malformed_rent_fails_the_whole_render() {
    let state = state_with_rows(vec![
        listing_row("東京都千代田区丸の内2-1", "18万円", "35.681", "139.764", TransitBucket::High, PriceBucket::Tier2),
        listing_row("東京都台東区上野7-1", "要問合せ", "35.713", "139.777", TransitBucket::Low, PriceBucket::Tier1),
    ]);

    // fails even though the bad row wouldn't match the selection
    let err = handle(request(Method::GET, &uri_for("/", &selected()), None), &state)
        .expect_err("malformed rent should abort");

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 500);
    let body = body_string(resp);
    assert!(body.contains("要問合せ"));
    assert!(body.contains("row 2"));
}

#[test]
fn upstream_failure_is_bad_gateway() {
    let state = AppState::new(Box::new(FailingSource));

    let err = handle(request(Method::GET, "/", None), &state).expect_err("fetch should fail");

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 502);
    assert!(body_string(resp).contains("connection refused"));
}

#[test]
fn unknown_selector_label_is_bad_request() {
    let state = state_with_rows(vec![]);

    let err = handle(request(Method::GET, "/?price=99", None), &state)
        .expect_err("unknown label should be rejected");

    assert_eq!(error_to_response(err).status(), 400);
}

#[test]
fn plain_visits_leave_no_session_behind() {
    let state = state_with_rows(vec![]);

    for uri in ["/", "/api/view", "/?transit=&price="] {
        for _ in 0..50 {
            let resp = handle(request(Method::GET, uri, None), &state).expect("Handler failed");
            assert!(session_cookie(&resp).is_none(), "{uri} shouldn't set a cookie");
        }
    }
    let resp = handle(request(Method::GET, "/", Some("session=made-up")), &state)
        .expect("Handler failed");
    assert!(session_cookie(&resp).is_none());

    assert_eq!(state.sessions.active_sessions(), 0);
}

#[test]
fn unknown_route_is_not_found() {
    let state = state_with_rows(vec![]);

    let err = handle(request(Method::GET, "/admin", None), &state).expect_err("no such route");

    assert_eq!(error_to_response(err).status(), 404);
}

// templates/pages/listings.rs

use crate::domain::map::MapStatus;
use crate::domain::{RenderView, SelectorPair};
use crate::errors::ServerError;
use crate::templates::components::{
    listing_map, results_table, selector_form, PRICE_PARAM, TRANSIT_PARAM,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub const PAGE_TITLE: &str = "賃貸物件情報の可視化";
pub const NO_MATCH_MESSAGE: &str = "条件に合う物件が見つかりません。";
pub const NO_MAPPABLE_MESSAGE: &str = "地図を表示できる物件がありません。";
pub const MAP_HEADING: &str = "物件の位置";
pub const TABLE_HEADING: &str = "条件に合う物件一覧";
pub const SHOW_ALL_BUTTON: &str = "地図上以外の物件も表示";

pub fn listings_page(selectors: &SelectorPair, view: &RenderView) -> Result<Markup, ServerError> {
    let body = match view {
        RenderView::Inactive => html! {},
        RenderView::ActiveEmpty => html! {
            p class="notice" { (NO_MATCH_MESSAGE) }
        },
        RenderView::ActiveNonempty {
            map,
            table,
            full_table,
        } => {
            let map_section = match map.status {
                MapStatus::Mappable => html! {
                    h3 { (MAP_HEADING) }
                    (listing_map(map)?)
                },
                MapStatus::NoInput | MapStatus::NoMappableRecords => html! {
                    p class="notice" { (NO_MAPPABLE_MESSAGE) }
                },
            };

            html! {
                section id="map-section" { (map_section) }
                section id="results" {
                    h3 { (TABLE_HEADING) }
                    (results_table(table))
                }
                form method="post" action=(toggle_action(selectors)) {
                    button type="submit" { (SHOW_ALL_BUTTON) }
                }
                @if let Some(all) = full_table {
                    section id="all-listings" {
                        (results_table(all))
                    }
                }
            }
        }
    };

    Ok(desktop_layout(
        PAGE_TITLE,
        html! {
            (selector_form(selectors))
            (body)
        },
    ))
}

/// Query string carrying the current selection, shared by the toggle form
/// and the redirect back to the page.
pub fn selection_query(selectors: &SelectorPair) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair(TRANSIT_PARAM, selectors.transit.label())
        .append_pair(PRICE_PARAM, selectors.price.label())
        .finish()
}

fn toggle_action(selectors: &SelectorPair) -> String {
    format!("/toggle-show-all?{}", selection_query(selectors))
}

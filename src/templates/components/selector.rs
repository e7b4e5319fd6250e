use crate::domain::{PriceBucket, SelectorPair, TransitBucket};
use maud::{html, Markup};

pub const TRANSIT_PARAM: &str = "transit";
pub const PRICE_PARAM: &str = "price";

const TRANSIT_LEGEND: &str = "■ 最寄り駅からの乗り入れ本数";
const PRICE_LEGEND: &str = "■ 月額費用(管理費込み)";

/// Both radio groups side by side. Picking an option resubmits the form.
pub fn selector_form(selectors: &SelectorPair) -> Markup {
    html! {
        form method="get" action="/" class="selectors" {
            (radio_group(
                TRANSIT_LEGEND,
                TRANSIT_PARAM,
                TransitBucket::ALL.iter().map(|b| (b.label(), *b == selectors.transit)),
            ))
            (radio_group(
                PRICE_LEGEND,
                PRICE_PARAM,
                PriceBucket::ALL.iter().map(|b| (b.label(), *b == selectors.price)),
            ))
            noscript { button type="submit" { "表示" } }
        }
    }
}

fn radio_group<'a>(
    legend: &str,
    name: &str,
    options: impl Iterator<Item = (&'a str, bool)>,
) -> Markup {
    html! {
        fieldset {
            legend { (legend) }
            @for (label, checked) in options {
                label {
                    input type="radio" name=(name) value=(label) checked[checked] onchange="this.form.submit()";
                    " " (label)
                }
            }
        }
    }
}

use crate::domain::table::DisplayTable;
use maud::{html, Markup, PreEscaped};

/// Plain cells are escaped; the link cell is already anchor markup.
pub fn results_table(table: &DisplayTable) -> Markup {
    html! {
        table class="listings" {
            thead {
                tr {
                    @for column in &table.columns {
                        th { (column) }
                    }
                }
            }
            tbody {
                @for row in &table.rows {
                    tr {
                        td { (row.ordinal) }
                        td { (row.address) }
                        td { (row.rent) }
                        td { (row.layout) }
                        td { (row.floor) }
                        td { (row.building_age) }
                        td { (PreEscaped(row.link.as_str())) }
                    }
                }
            }
        }
    }
}

use maud::{html, Markup, PreEscaped, DOCTYPE};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 1100px; margin: 0 auto; padding: 1rem 1.5rem; color: #222; }
.selectors { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.selectors fieldset { border: none; padding: 0; }
.selectors legend { font-weight: bold; margin-bottom: 0.5rem; }
.selectors label { display: block; margin: 0.2rem 0; cursor: pointer; }
#map { height: 500px; margin: 1rem 0; border-radius: 6px; }
table.listings { border-collapse: collapse; width: 100%; margin: 1rem 0; font-size: 0.95rem; }
table.listings th, table.listings td { border: 1px solid #ddd; padding: 6px 10px; text-align: left; }
table.listings th { background: #f4f4f4; }
table.listings tr:nth-child(even) { background: #fafafa; }
.notice { color: #555; }
.pin { width: 26px; height: 26px; border-radius: 50% 50% 50% 0; transform: rotate(-45deg); border: 2px solid #fff; box-shadow: 0 0 3px rgba(0,0,0,.4); }
.pin-red { background: #d63e2a; }
.pin-blue { background: #38aadd; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ja" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(LEAFLET_CSS);
                script src=(LEAFLET_JS) {}
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    h1 { (title) }
                }
                main {
                    (content)
                }
            }
        }
    }
}

use crate::domain::map::MapProjection;
use crate::errors::ServerError;
use maud::{html, Markup, PreEscaped};

/// Draws the projection with Leaflet: tiles, the reference pin and circle,
/// then one pin per listing. Popups are inserted as markup.
const MAP_SCRIPT: &str = r#"
(function () {
  var data = JSON.parse(document.getElementById('map-data').textContent);
  var map = L.map('map').setView(data.center, data.zoom);
  L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
    attribution: '&copy; OpenStreetMap contributors'
  }).addTo(map);

  function pin(marker) {
    var icon = L.divIcon({
      className: 'marker-' + marker.icon.icon,
      html: '<div class="pin pin-' + marker.icon.color + '"></div>',
      iconSize: [26, 26],
      iconAnchor: [13, 26],
      popupAnchor: [0, -26]
    });
    L.marker(marker.position, { icon: icon })
      .bindPopup(marker.popup, { maxWidth: data.popup_max_width })
      .addTo(map);
  }

  pin(data.reference);
  var area = data.reference_area;
  L.circle(area.center, {
    radius: area.radius_m,
    color: area.color,
    fill: true,
    fillColor: area.fill_color,
    fillOpacity: area.fill_opacity
  }).bindPopup(area.popup).addTo(map);
  data.listings.forEach(pin);
})();
"#;

pub fn listing_map(projection: &MapProjection) -> Result<Markup, ServerError> {
    let payload = map_payload(projection)?;

    Ok(html! {
        div id="map" {}
        script type="application/json" id="map-data" { (PreEscaped(payload)) }
        script { (PreEscaped(MAP_SCRIPT)) }
    })
}

/// JSON for the embedded data block. `</` is escaped so popup markup can't
/// close the script element early.
pub fn map_payload(projection: &MapProjection) -> Result<String, ServerError> {
    let json = serde_json::to_string(projection).map_err(|_| ServerError::InternalError)?;
    Ok(json.replace("</", "<\\/"))
}

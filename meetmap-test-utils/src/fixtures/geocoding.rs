use serde_json::{json, Value};

/// Create a geocoder hit; coordinates are strings like the provider sends them.
pub fn geocode_json(lat: &str, lon: &str, display_name: &str) -> Value {
    json!({
        "lat": lat,
        "lon": lon,
        "display_name": display_name
    })
}

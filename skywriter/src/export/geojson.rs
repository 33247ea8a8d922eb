//! GeoJSON feature collection: home point, waypoint points, path line.
//!
//! Coordinates are `[longitude, latitude, altitude MSL]`.

use serde_json::{json, Value};

use crate::error::Result;
use crate::mission::Mission;

pub(super) fn render(mission: &Mission) -> Result<String> {
    let home = mission.home();
    let mut features = vec![json!({
        "type": "Feature",
        "properties": {
            "name": "Home Position",
            "type": "home",
            "altitude": home.altitude_msl,
        },
        "geometry": {
            "type": "Point",
            "coordinates": [home.longitude, home.latitude, home.altitude_msl],
        },
    })];

    features.extend(mission.waypoints().enumerate().map(|(i, w)| {
        json!({
            "type": "Feature",
            "properties": {
                "name": format!("WP{}", i + 1),
                "type": "waypoint",
                "index": i + 1,
                "altitude": w.altitude_msl,
                "relative_altitude": w.relative_altitude,
                "role": w.role,
            },
            "geometry": {
                "type": "Point",
                "coordinates": [w.longitude, w.latitude, w.altitude_msl],
            },
        })
    }));

    let path: Vec<Value> = mission
        .waypoints()
        .map(|w| json!([w.longitude, w.latitude, w.altitude_msl]))
        .collect();
    features.push(json!({
        "type": "Feature",
        "properties": {
            "name": "Flight Path",
            "type": "path",
            "waypoint_count": path.len(),
        },
        "geometry": {
            "type": "LineString",
            "coordinates": path,
        },
    }));

    let collection = json!({
        "type": "FeatureCollection",
        "features": features,
    });
    Ok(serde_json::to_string_pretty(&collection)?)
}

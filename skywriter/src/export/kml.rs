//! KML 2.2 document for Google Earth and GIS viewers.

use crate::export::ExportMetadata;
use crate::mission::Mission;

const HOME_ICON: &str = "http://maps.google.com/mapfiles/kml/paddle/grn-circle.png";
const WAYPOINT_ICON: &str = "http://maps.google.com/mapfiles/kml/paddle/blu-circle.png";

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

pub(super) fn render(mission: &Mission, metadata: &ExportMetadata) -> String {
    let home = mission.home();
    let name = escape(metadata.text.as_deref().unwrap_or("Drone Mission"));

    let mut description = format!(
        "Text-to-Drone Mission\nText: {}\nWaypoints: {}",
        escape(metadata.text.as_deref().unwrap_or("N/A")),
        mission.waypoint_count()
    );
    if let Some(time) = metadata.generated_at {
        description.push_str(&format!("\nGenerated: {}", time.format("%Y-%m-%d %H:%M:%S UTC")));
    }

    let mut out = String::new();
    out.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>{name}</name>
    <description>{description}</description>
    <Style id="homeStyle">
      <IconStyle><Icon><href>{HOME_ICON}</href></Icon></IconStyle>
    </Style>
    <Style id="waypointStyle">
      <IconStyle><Icon><href>{WAYPOINT_ICON}</href></Icon></IconStyle>
    </Style>
    <Style id="pathStyle">
      <LineStyle><color>ff0000ff</color><width>3</width></LineStyle>
    </Style>
    <Placemark>
      <name>Home Position</name>
      <styleUrl>#homeStyle</styleUrl>
      <Point><coordinates>{},{},{}</coordinates></Point>
    </Placemark>
"#,
        home.longitude, home.latitude, home.altitude_msl
    ));

    for (i, w) in mission.waypoints().enumerate() {
        out.push_str(&format!(
            r#"    <Placemark>
      <name>WP{index}</name>
      <description>Waypoint {index}
Alt: {alt:.1}m</description>
      <styleUrl>#waypointStyle</styleUrl>
      <Point><altitudeMode>absolute</altitudeMode><coordinates>{lon},{lat},{alt}</coordinates></Point>
    </Placemark>
"#,
            index = i + 1,
            lat = w.latitude,
            lon = w.longitude,
            alt = w.altitude_msl
        ));
    }

    let coordinates: Vec<String> = mission
        .waypoints()
        .map(|w| format!("{},{},{}", w.longitude, w.latitude, w.altitude_msl))
        .collect();
    out.push_str(&format!(
        r#"    <Placemark>
      <name>Flight Path</name>
      <styleUrl>#pathStyle</styleUrl>
      <LineString>
        <altitudeMode>absolute</altitudeMode>
        <coordinates>
{}
        </coordinates>
      </LineString>
    </Placemark>
  </Document>
</kml>
"#,
        coordinates.join("\n")
    ));
    out
}

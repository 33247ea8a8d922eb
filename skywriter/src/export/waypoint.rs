//! Legacy `QGC WPL 110` waypoint list: one tab-separated line per item.
//!
//! Columns: index, current, frame, command, param1..param4, latitude,
//! longitude, altitude, autocontinue. Line 0 is the home position.

use crate::mission::{command, AltitudeFrame, Mission};

pub(super) fn render(mission: &Mission) -> String {
    let home = mission.home();
    let mut out = String::from("QGC WPL 110\n");
    out.push_str(&format!(
        "0\t1\t0\t{}\t0\t0\t0\t0\t{:.7}\t{:.7}\t{:.2}\t1\n",
        command::NAV_WAYPOINT,
        home.latitude,
        home.longitude,
        home.altitude_msl
    ));

    let frame = AltitudeFrame::GlobalRelative.code();
    for (i, w) in mission.waypoints().enumerate() {
        out.push_str(&format!(
            "{}\t0\t{frame}\t{}\t0\t{}\t0\t0\t{:.7}\t{:.7}\t{:.2}\t1\n",
            i + 1,
            command::NAV_WAYPOINT,
            w.acceptance_radius,
            w.latitude,
            w.longitude,
            w.relative_altitude
        ));
    }
    out
}

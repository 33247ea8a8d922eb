//! Plain CSV waypoint table with absolute altitudes.

use crate::mission::Mission;

pub(super) fn render(mission: &Mission) -> String {
    let home = mission.home();
    let mut out = String::from("Waypoint,Latitude,Longitude,Altitude_MSL,Description\n");
    out.push_str(&format!(
        "HOME,{:.7},{:.7},{:.2},Home/Takeoff position\n",
        home.latitude, home.longitude, home.altitude_msl
    ));
    for (i, w) in mission.waypoints().enumerate() {
        let n = i + 1;
        out.push_str(&format!(
            "WP{n},{:.7},{:.7},{:.2},Waypoint {n}\n",
            w.latitude, w.longitude, w.altitude_msl
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::small_mission;

    #[test]
    fn test_csv_rows() {
        let out = render(&small_mission());
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(
            rows,
            vec![
                "Waypoint,Latitude,Longitude,Altitude_MSL,Description",
                "HOME,47.5000000,8.5000000,100.00,Home/Takeoff position",
                "WP1,47.5001000,8.5001000,130.00,Waypoint 1",
                "WP2,47.5002000,8.5002000,140.00,Waypoint 2",
            ]
        );
    }

    #[test]
    fn test_every_row_is_terminated() {
        let out = render(&small_mission());
        assert!(out.ends_with('\n'));
        assert_eq!(out.matches('\n').count(), 4);
    }
}

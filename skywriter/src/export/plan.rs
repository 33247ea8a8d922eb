//! QGroundControl plan file (JSON, plan format version 1, mission version 2).

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::mission::{Mission, MissionItem};

/// PX4 autopilot.
const FIRMWARE_PX4: u8 = 12;
/// Multirotor.
const VEHICLE_MULTIROTOR: u8 = 2;
/// Altitudes relative to home.
const ALTITUDE_MODE_RELATIVE: u8 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanFile {
    file_type: &'static str,
    geo_fence: GeoFence,
    ground_station: &'static str,
    mission: PlanMission,
    rally_points: RallyPoints,
    version: u8,
}

#[derive(Serialize)]
struct GeoFence {
    circles: Vec<Value>,
    polygons: Vec<Value>,
    version: u8,
}

#[derive(Serialize)]
struct RallyPoints {
    points: Vec<Value>,
    version: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanMission {
    cruise_speed: f64,
    firmware_type: u8,
    global_plan_altitude_mode: u8,
    hover_speed: f64,
    items: Vec<SimpleItem>,
    planned_home_position: [f64; 3],
    vehicle_type: u8,
    version: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SimpleItem {
    #[serde(rename = "type")]
    kind: &'static str,
    command: u16,
    frame: u8,
    auto_continue: bool,
    do_jump_id: usize,
    params: [Option<f64>; 7],
}

fn params(item: &MissionItem) -> [Option<f64>; 7] {
    match *item {
        MissionItem::Takeoff {
            latitude,
            longitude,
            altitude,
        } => [
            Some(0.0),
            Some(0.0),
            Some(0.0),
            None,
            Some(latitude),
            Some(longitude),
            Some(altitude),
        ],
        MissionItem::ChangeSpeed { speed } => {
            [Some(1.0), Some(speed), Some(-1.0), Some(0.0), Some(0.0), Some(0.0), Some(0.0)]
        }
        MissionItem::Waypoint(w) => [
            Some(0.0),
            Some(w.acceptance_radius),
            Some(if w.fly_through { w.acceptance_radius } else { 0.0 }),
            None,
            Some(w.latitude),
            Some(w.longitude),
            Some(w.relative_altitude),
        ],
        MissionItem::ReturnToLaunch => [Some(0.0); 7],
    }
}

pub(super) fn render(mission: &Mission) -> Result<String> {
    let home = mission.home();
    let speed = mission.flight().speed;
    let items = mission
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| SimpleItem {
            kind: "SimpleItem",
            command: item.command(),
            frame: item.frame().code(),
            auto_continue: true,
            do_jump_id: i + 1,
            params: params(item),
        })
        .collect();

    let plan = PlanFile {
        file_type: "Plan",
        geo_fence: GeoFence {
            circles: Vec::new(),
            polygons: Vec::new(),
            version: 2,
        },
        ground_station: "QGroundControl",
        mission: PlanMission {
            cruise_speed: speed,
            firmware_type: FIRMWARE_PX4,
            global_plan_altitude_mode: ALTITUDE_MODE_RELATIVE,
            hover_speed: speed,
            items,
            planned_home_position: [home.latitude, home.longitude, home.altitude_msl],
            vehicle_type: VEHICLE_MULTIROTOR,
            version: 2,
        },
        rally_points: RallyPoints {
            points: Vec::new(),
            version: 2,
        },
        version: 1,
    };
    Ok(serde_json::to_string_pretty(&plan)?)
}

use kurbo::Point;
use serde_json::Value;
use skywriter::{
    add_transitions, project_path, render_mission, run_pipeline, sequence_strokes, BuiltinFont, Error, ExportFormat,
    ExportMetadata, GapKind, HomePosition, OrderingMethod, PipelineConfig, Role, Scene, SequenceOptions,
    SimplifyOptions, Stroke, TransitionOptions,
};

fn two_bars() -> Scene {
    Scene::new(vec![
        Stroke::from_xy(&[(0.0, 0.0), (0.0, 10.0)]).unwrap(),
        Stroke::from_xy(&[(20.0, 0.0), (20.0, 10.0)]).unwrap(),
    ])
}

fn local_path(scene: &Scene, continuous_threshold: f64) -> Vec<(f64, f64, f64, Role)> {
    let options = SequenceOptions {
        method: OrderingMethod::Original,
        continuous_threshold,
    };
    let sequence = sequence_strokes(scene, &options).unwrap();
    let transitions = TransitionOptions {
        write_altitude: 30.0,
        transit_offset: 10.0,
        direct: false,
    };
    add_transitions(&sequence, &transitions)
        .unwrap()
        .waypoints()
        .iter()
        .map(|w| (w.east(), w.north(), w.altitude, w.role))
        .collect()
}

fn config(text: &str) -> PipelineConfig {
    let mut config = PipelineConfig::default();
    config.text.text = text.to_string();
    config.home = HomePosition::new(47.397742, 8.545594, 488.0).unwrap();
    config
}

#[test]
fn test_lifted_transition_between_bars() {
    assert_eq!(
        local_path(&two_bars(), 0.0),
        vec![
            (0.0, 0.0, 30.0, Role::Draw),
            (0.0, 10.0, 30.0, Role::Draw),
            (0.0, 10.0, 40.0, Role::Transit),
            (20.0, 0.0, 40.0, Role::Transit),
            (20.0, 0.0, 30.0, Role::Draw),
            (20.0, 10.0, 30.0, Role::Draw),
        ]
    );
}

#[test]
fn test_continuous_bars_are_drawn_as_one_line() {
    assert_eq!(
        local_path(&two_bars(), 25.0),
        vec![
            (0.0, 0.0, 30.0, Role::Draw),
            (0.0, 10.0, 30.0, Role::Draw),
            (20.0, 0.0, 30.0, Role::Draw),
            (20.0, 10.0, 30.0, Role::Draw),
        ]
    );
}

#[test]
fn test_home_origin_projects_onto_home() {
    let scene = Scene::new(vec![Stroke::from_xy(&[(0.0, 0.0), (0.0, 5.0)]).unwrap()]);
    let sequence = sequence_strokes(&scene, &SequenceOptions::default()).unwrap();
    let path = add_transitions(&sequence, &TransitionOptions::default()).unwrap();
    assert_eq!(path.waypoints()[0].position, Point::ORIGIN);

    let home = HomePosition::new(0.0, 0.0, 0.0).unwrap();
    let first = project_path(&path, &home).unwrap()[0];
    assert!(first.latitude.abs() < 1e-12);
    assert!(first.longitude.abs() < 1e-12);
    assert_eq!(first.altitude_msl, 30.0);
}

#[test]
fn test_default_epsilon_for_twenty_meter_letters() {
    let config = PipelineConfig::default();
    assert_eq!(config.text.letter_height, 20.0);
    assert!((SimplifyOptions::default().resolve_epsilon(config.text.letter_height) - 0.4).abs() < 1e-12);
}

#[test]
fn test_full_run_produces_consistent_stages() {
    let output = run_pipeline(&config("Hi 42"), &BuiltinFont).unwrap();

    assert!(!output.scene.is_empty());
    assert_eq!(output.simplified.len(), output.scene.len());
    assert!(output.simplified.point_count() <= output.scene.point_count());

    let mut order = output.sequence.source_order();
    order.sort_unstable();
    assert_eq!(order, (0..output.simplified.len()).collect::<Vec<_>>());

    assert_eq!(output.path.gaps().len(), output.sequence.len() - 1);
    assert_eq!(output.points.len(), output.path.len());
    assert_eq!(output.mission.waypoint_count(), output.path.len());
    assert_eq!(output.mission.items().len(), output.path.len() + 3);

    for w in output.path.waypoints() {
        match w.role {
            Role::Draw => assert_eq!(w.altitude, 30.0),
            Role::Transit => assert_eq!(w.altitude, 40.0),
        }
    }
    let lifted = output.path.gaps().iter().filter(|g| **g == GapKind::Lifted).count();
    assert_eq!(output.path.count(Role::Transit), 2 * lifted);

    assert!(output.transitions.total <= output.transitions.max * output.transitions.count as f64 + 1e-9);
    assert!(output.flight_time.seconds > 0.0);
}

#[test]
fn test_text_sits_north_east_of_home() {
    let mut config = config("HI");
    config.text.margin_x = Some(5.0);
    config.text.margin_y = Some(7.0);
    let output = run_pipeline(&config, &BuiltinFont).unwrap();
    let bounds = output.scene.bounds().unwrap();
    assert!((bounds.x0 - 5.0).abs() < 1e-9);
    assert!((bounds.y0 - 7.0).abs() < 1e-9);
    assert!((bounds.height() - 20.0).abs() < 1e-9);
    assert!(output
        .points
        .iter()
        .all(|p| p.latitude > 47.397742 && p.longitude > 8.545594));
}

#[test]
fn test_plan_output_matches_mission() {
    let output = run_pipeline(&config("OK"), &BuiltinFont).unwrap();
    let json = render_mission(&output.mission, ExportFormat::Plan, &ExportMetadata::default()).unwrap();
    let plan: Value = serde_json::from_str(&json).unwrap();
    let items = plan["mission"]["items"].as_array().unwrap();
    assert_eq!(items.len(), output.mission.items().len());
    assert_eq!(items.first().unwrap()["command"], 22);
    assert_eq!(items[1]["command"], 178);
    assert_eq!(items.last().unwrap()["command"], 20);

    let first_wp = &output.points[0];
    assert_eq!(items[2]["params"][4], first_wp.latitude);
    assert_eq!(items[2]["params"][5], first_wp.longitude);
    assert_eq!(items[2]["params"][6], first_wp.relative_altitude);
}

#[test]
fn test_mission_ceiling_is_reported_not_truncated() {
    let mut config = config("SKYWRITING");
    config.flight.max_items = 20;
    let err = run_pipeline(&config, &BuiltinFont).unwrap_err();
    match err {
        Error::WaypointLimitExceeded { actual, allowed } => {
            assert_eq!(allowed, 20);
            assert!(actual > 20);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_font_aborts_run() {
    let mut config = config("HI");
    config.text.font = "futural".to_string();
    assert!(matches!(
        run_pipeline(&config, &BuiltinFont),
        Err(Error::GlyphLookup { .. })
    ));
}

#[test]
fn test_blank_text_has_no_mission() {
    let err = run_pipeline(&config("   "), &BuiltinFont).unwrap_err();
    assert!(matches!(err, Error::Validation { field: "waypoints", .. }));
}

#[test]
fn test_rotated_text_keeps_shape() {
    let straight = run_pipeline(&config("T"), &BuiltinFont).unwrap();
    let mut turned = config("T");
    turned.text.rotation_deg = 90.0;
    let turned = run_pipeline(&turned, &BuiltinFont).unwrap();
    let a = straight.scene.bounds().unwrap();
    let b = turned.scene.bounds().unwrap();
    assert!((a.width() - b.height()).abs() < 1e-9);
    assert!((a.height() - b.width()).abs() < 1e-9);
}

use armstack_engine::{ConfigError, SimulationCore, WorldConfig};

#[test]
fn default_config_round_trips_through_json() {
    let config = WorldConfig::default();
    let json = config.to_json();
    let parsed = WorldConfig::from_json(&json).expect("own output should parse");
    assert_eq!(parsed, config);
}

#[test]
fn custom_layout_drives_the_simulation() {
    let json = r##"{
        "world_width": 600.0,
        "floor_y": 400.0,
        "arm": { "base_x": 300.0, "base_y": 390.0, "upper_len": 150.0, "lower_len": 120.0 },
        "boxes": [
            { "id": 10, "x": 100.0, "y": 100.0, "size": 30.0, "color": "#ffffff" }
        ]
    }"##;
    let mut world = SimulationCore::from_config_json(json).expect("valid config");
    assert_eq!(world.box_count(), 1);

    for _ in 0..400 {
        world.step();
    }
    let state = world.current_state();
    let b = state.box_by_id(10).expect("box 10");
    assert_eq!(b.y, 385.0);
    assert_eq!(state.base.x, 300.0);
}

#[test]
fn invalid_config_is_rejected() {
    let err = SimulationCore::from_config_json(r#"{ "world_width": -1.0 }"#)
        .err()
        .expect("negative width must fail");
    assert!(matches!(err, ConfigError::InvalidGeometry(_)));
    assert!(err.to_string().contains("invalid geometry"));
}

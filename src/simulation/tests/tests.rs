use super::*;
use crate::domain::{default_boxes, CargoBox};
use crate::geometry::Vec2;

fn settle_arm(world: &mut SimulationCore) -> u32 {
    for n in 1..=500 {
        world.step();
        if !world.arm.animating {
            return n;
        }
    }
    panic!("arm never settled");
}

#[test]
fn tick_applies_commands_in_order_and_records_outcomes() {
    let mut world = SimulationCore::new();
    let mut queue: CommandQueue = vec![
        Command::SetTarget { x: 0.0, y: 0.0 },
        Command::SetTarget { x: 280.0, y: 200.0 },
        Command::ToggleClaw,
    ]
    .into_iter()
    .collect();

    let state = world.tick(&mut queue);

    assert!(queue.is_empty());
    assert_eq!(state.frame, 1);
    assert_eq!(
        world.last_outcomes(),
        &[
            CommandOutcome::Rejected {
                error: ArmError::Unreachable { x: 0.0, y: 0.0 }
            },
            CommandOutcome::Applied,
            CommandOutcome::Claw {
                result: ClawResult::NoBoxNearby
            },
        ]
    );
    assert!(state.animating);
    assert_eq!(state.target_point, Some(Vec2::new(280.0, 200.0)));
    assert!(!state.claw.closed);
}

#[test]
fn unreachable_target_changes_nothing_but_the_notice() {
    let mut world = SimulationCore::new();
    let before = world.current_state();

    assert!(world.set_target(390.0, 10.0).is_err());

    let after = world.current_state();
    assert_eq!(after.joint1, before.joint1);
    assert_eq!(after.joint2, before.joint2);
    assert_eq!(after.target_joint1, before.target_joint1);
    assert!(!after.animating);
    assert_eq!(after.boxes, before.boxes);
    let notice = after.notice.expect("out of reach notice");
    assert_eq!(notice.kind, NoticeKind::Error);
}

#[test]
fn click_on_a_handle_neither_moves_nor_warns() {
    let mut world = SimulationCore::new();
    let elbow = world.current_state().elbow;

    assert_eq!(world.set_target(elbow.x + 2.0, elbow.y), Err(ArmError::OnHandle));
    assert_eq!(world.set_target(203.0, 298.0), Err(ArmError::OnHandle));

    world.step();
    let state = world.current_state();
    assert!(!state.animating);
    assert_eq!(state.target_point, None);
    assert!(state.notice.is_none());
}

#[test]
fn held_box_rides_under_the_claw() {
    let mut world = SimulationCore::new();
    world.set_target(80.0, 270.0).expect("reachable");
    settle_arm(&mut world);
    assert_eq!(world.toggle_claw(), ClawResult::Grabbed(1));

    // Stationary arm: the box sits exactly under the pivot every tick.
    for _ in 0..20 {
        world.step();
        let state = world.current_state();
        let held = state.box_by_id(1).expect("box 1");
        assert_eq!((held.vx, held.vy), (0.0, 0.0));
        assert_eq!(held.x, state.end.x);
        assert_eq!(held.y, state.end.y + world.config.claw.carry_offset);
    }

    // While moving, velocity stays pinned and the box follows.
    world.set_target(200.0, 150.0).expect("reachable");
    while world.arm.animating {
        world.step();
        let held = world.current_state().box_by_id(1).cloned().expect("box 1");
        assert_eq!((held.vx, held.vy), (0.0, 0.0));
    }
    world.step();
    let state = world.current_state();
    let held = state.box_by_id(1).expect("box 1");
    assert!(held.center().distance(Vec2::new(200.0, 168.0)) < 0.05);
}

#[test]
fn failed_grab_leaves_claw_open() {
    let mut world = SimulationCore::new();
    world.set_target(200.0, 150.0).expect("reachable");
    settle_arm(&mut world);

    assert_eq!(world.toggle_claw(), ClawResult::NoBoxNearby);
    assert!(!world.claw.closed);
    assert_eq!(world.held_box(), None);

    // Opening an empty open claw is not possible; the next toggle tries again.
    assert_eq!(world.toggle_claw(), ClawResult::NoBoxNearby);
}

#[test]
fn released_box_falls_and_lands() {
    let mut world = SimulationCore::new();
    world.set_target(140.0, 270.0).expect("reachable");
    settle_arm(&mut world);
    assert_eq!(world.toggle_claw(), ClawResult::Grabbed(3));

    world.set_target(200.0, 150.0).expect("reachable");
    settle_arm(&mut world);
    assert_eq!(world.toggle_claw(), ClawResult::Released(Some(3)));
    assert_eq!(world.held_box(), None);

    for _ in 0..400 {
        world.step();
    }
    let b = world.boxes.get(3).expect("box 3");
    assert_eq!(b.vy, 0.0);
    assert!((b.y + b.half() - world.config.floor_y).abs() < 1e-3);
}

#[test]
fn drag_start_stops_easing_in_the_same_tick() {
    let mut world = SimulationCore::new();
    world.set_target(280.0, 200.0).expect("reachable");
    world.step();
    let j1 = world.arm.joint1;
    let j2 = world.arm.joint2;

    assert_eq!(world.pointer_down(200.0, 300.0), Some(Joint::Joint1));
    world.step();
    assert_eq!(world.arm.joint1, j1);
    assert_eq!(world.arm.joint2, j2);

    assert_eq!(world.set_target(120.0, 250.0), Err(ArmError::DragActive));

    world.drag_to(100.0, 300.0);
    world.end_drag();
    world.step();
    let state = world.current_state();
    assert!((state.joint1.abs() - 180.0).abs() < 1e-3);
    assert_eq!(state.target_joint1, state.joint1);
    assert!(!state.animating);
}

#[test]
fn reset_restores_defaults_regardless_of_history() {
    let mut world = SimulationCore::new();
    world.set_target(80.0, 270.0).expect("reachable");
    settle_arm(&mut world);
    world.toggle_claw();
    world.set_target(250.0, 200.0).expect("reachable");
    for _ in 0..30 {
        world.step();
    }
    world.boxes.get_mut(4).expect("box 4").vx = 12.0;

    world.reset();

    let state = world.current_state();
    assert_eq!(state.boxes, default_boxes());
    assert_eq!(state.held_box, None);
    assert!(!state.claw.closed);
    assert_eq!(state.stack_height, 1);

    // Nothing from the old set leaks into the next tick.
    world.step();
    assert_eq!(world.current_state().boxes, default_boxes());
}

#[test]
fn notice_expires_after_configured_ticks() {
    let mut world = SimulationCore::new();
    world.config.notice_ticks = 3;
    world.reset();
    assert_eq!(
        world.current_state().notice.map(|n| n.message),
        Some("Reset complete!".to_string())
    );

    world.step();
    world.step();
    assert!(world.current_state().notice.is_some());
    world.step();
    assert!(world.current_state().notice.is_none());
}

#[test]
fn newer_notice_replaces_the_current_one() {
    let mut world = SimulationCore::new();
    world.reset();
    world.step();
    assert!(world.set_target(390.0, 10.0).is_err());

    let notice = world.current_state().notice.expect("notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Out of reach!");
    assert_eq!(notice.ticks_remaining, world.config.notice_ticks);
}

#[test]
fn hand_built_column_reports_its_height() {
    let mut config = WorldConfig::default();
    config.boxes = vec![
        CargoBox::new(1, 100.0, 294.0, 26.0, "#ef4444"),
        CargoBox::new(2, 100.0, 268.0, 26.0, "#3b82f6"),
        CargoBox::new(3, 100.0, 242.0, 26.0, "#22c55e"),
        CargoBox::new(4, 300.0, 294.0, 26.0, "#a855f7"),
    ];
    let mut world = SimulationCore::with_config(config);
    assert_eq!(world.stack_height(), 3);

    for _ in 0..200 {
        world.step();
    }
    assert_eq!(world.stack_height(), 3);
}

#[test]
fn perf_metrics_are_opt_in() {
    let mut world = SimulationCore::new();
    world.step();
    assert_eq!(world.perf_stats().step_ms(), 0.0);

    world.enable_perf_metrics(true);
    let mut queue = CommandQueue::new();
    queue.push(Command::ToggleClaw);
    world.tick(&mut queue);
    let stats = world.perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.box_count(), 4);
    assert_eq!(stats.commands_applied(), 1);

    // A bare step drains nothing and must not repeat the last tick's count.
    world.step();
    assert_eq!(world.perf_stats().commands_applied(), 0);
    assert_eq!(world.last_outcomes().len(), 1);
}

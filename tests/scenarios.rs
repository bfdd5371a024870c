//! End-to-end sessions driven through the public API

use glam::Vec2;
use laser_arena::sim::{Hazard, KeyEvent, Notification};
use laser_arena::{ArenaConfig, Session, StepOutput};

const P0_RIGHT: u32 = 39;
const P1_DOWN: u32 = 83;

fn config_with_spawn(p0: Vec2, p1: Vec2) -> ArenaConfig {
    ArenaConfig {
        spawn: [p0, p1],
        ..Default::default()
    }
}

#[test]
fn holding_right_gains_one_unit_per_tick() {
    let config = ArenaConfig::from_json_str(
        r#"{
            "width": 1280, "height": 720,
            "acceleration": 2, "deceleration": 1,
            "tick_period_ms": 10,
            "spawn": [[400, 400], [900, 200]]
        }"#,
    )
    .expect("valid config");
    let mut session = Session::new(config).expect("session");

    session.handle_key(KeyEvent::down(P0_RIGHT));
    let outputs = session.advance_to(100);
    assert_eq!(outputs.len(), 10);

    let mut last_x = 400.0;
    for (i, out) in outputs.iter().enumerate() {
        let player = out.state.players[0];
        // +2 from the key, -1 from friction
        assert_eq!(player.vel, Vec2::new((i + 1) as f32, 0.0));
        assert!(player.pos.x > last_x);
        assert_eq!(player.pos.y, 400.0);
        last_x = player.pos.x;
    }
    assert_eq!(last_x, 400.0 + 55.0);
}

#[test]
fn releasing_coasts_to_a_stop() {
    let mut session = Session::new(config_with_spawn(
        Vec2::new(100.0, 100.0),
        Vec2::new(900.0, 600.0),
    ))
    .expect("session");

    session.handle_key(KeyEvent::down(P0_RIGHT));
    session.advance_to(50);
    session.handle_key(KeyEvent::up(P0_RIGHT));
    let v0 = session.state().players[0].vel.x;
    assert_eq!(v0, 5.0);

    // ceil(|v0| / decel) ticks
    session.advance_to(100);
    let resting = session.state().players[0];
    assert_eq!(resting.vel, Vec2::ZERO);

    session.advance_to(200);
    assert_eq!(session.state().players[0].pos, resting.pos);
}

#[test]
fn laser_through_player_kills_on_the_active_tick() {
    let mut session = Session::new(config_with_spawn(
        Vec2::new(400.0, 300.0),
        Vec2::new(900.0, 600.0),
    ))
    .expect("session");

    session.set_hazard(Some(Hazard::new(
        Vec2::new(0.0, 300.0),
        Vec2::new(1280.0, 300.0),
    )));
    let outputs = session.advance_to(10);

    assert_eq!(outputs.len(), 1);
    assert_eq!(
        outputs[0].notifications,
        vec![Notification::Death { player: 0 }]
    );
    assert_eq!(outputs[0].state.deaths, [1, 0]);
}

#[test]
fn player_pinned_in_corner_stays_inside() {
    let mut session = Session::new(config_with_spawn(
        Vec2::new(1275.0, 715.0),
        Vec2::new(5.0, 5.0),
    ))
    .expect("session");

    session.handle_key(KeyEvent::down(P0_RIGHT));
    session.handle_key(KeyEvent::down(40)); // player 0 down
    session.handle_key(KeyEvent::down(65)); // player 1 left
    session.handle_key(KeyEvent::down(87)); // player 1 up

    for out in session.advance_to(3_000) {
        for p in &out.state.players {
            assert!((0.0..=1280.0).contains(&p.pos.x));
            assert!((0.0..=720.0).contains(&p.pos.y));
        }
    }
    // Velocity keeps building against the wall
    assert!(session.state().players[0].vel.x > 100.0);
}

#[test]
fn death_counts_match_notifications() {
    let mut session = Session::new(ArenaConfig {
        seed: 2024,
        ..config_with_spawn(Vec2::new(640.0, 360.0), Vec2::new(200.0, 600.0))
    })
    .expect("session");

    session.handle_key(KeyEvent::down(P1_DOWN));
    let outputs = session.advance_to(20_000);

    let mut counted = [0u32; 2];
    for out in &outputs {
        for n in &out.notifications {
            if let Notification::Death { player } = n {
                counted[*player] += 1;
            }
        }
    }
    assert_eq!(session.state().deaths, counted);
    assert_eq!(session.state().time_ticks, 2_000);
}

#[test]
fn same_seed_and_script_replay_identically() {
    fn run() -> Vec<StepOutput> {
        let mut session = Session::new(ArenaConfig {
            seed: 77,
            ..Default::default()
        })
        .expect("session");
        let mut outputs = session.handle_key_at(35, KeyEvent::down(P0_RIGHT));
        outputs.extend(session.handle_key_at(260, KeyEvent::down(P1_DOWN)));
        outputs.extend(session.handle_key_at(900, KeyEvent::up(P0_RIGHT)));
        outputs.extend(session.advance_to(5_000));
        outputs
    }

    assert_eq!(run(), run());
}

#[test]
fn invalid_config_is_fatal() {
    let err = ArenaConfig::from_json_str(r#"{ "height": -720 }"#).unwrap_err();
    assert!(err.to_string().contains("invalid arena dimensions"));
}

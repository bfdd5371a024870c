//! Laser Arena entry point
//!
//! Headless driver: runs a short scripted session and logs what happens.
//! Usage: `laser-arena [config.json]`

use laser_arena::sim::{KeyEvent, Notification};
use laser_arena::{ArenaConfig, Session};

/// Scripted key edges: (time in ms, event)
const SCRIPT: &[(u64, KeyEvent)] = &[
    (0, KeyEvent::down(39)),   // player 0 right
    (120, KeyEvent::down(83)), // player 1 down
    (400, KeyEvent::up(39)),
    (700, KeyEvent::up(83)),
];

const RUN_UNTIL_MS: u64 = 2_000;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Laser Arena (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match ArenaConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Bad config {}: {}", path, e);
                std::process::exit(2);
            }
        },
        None => ArenaConfig::default(),
    };

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let mut collisions = 0u32;
    let mut report = |outputs: Vec<laser_arena::StepOutput>| {
        for output in outputs {
            for notification in output.notifications {
                match notification {
                    Notification::Collision => collisions += 1,
                    Notification::Death { player } => {
                        log::info!("tick {}: player {} hit the laser", output.state.time_ticks, player)
                    }
                }
            }
        }
    };

    for &(at, event) in SCRIPT {
        report(session.handle_key_at(at, event));
    }
    report(session.advance_to(RUN_UNTIL_MS));

    log::info!(
        "{} ticks, {} collision ticks, deaths {:?}",
        session.state().time_ticks,
        collisions,
        session.state().deaths
    );
    match session.state().to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => log::warn!("Could not serialize final state: {:?}", e),
    }

    session.shutdown();
}

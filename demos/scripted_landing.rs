//! Scripted landing driver.
//!
//! A hand-written policy that centers the vehicle over the target, descends
//! into the landing zone, and lands. Demonstrates the intended successful
//! episode shape end to end.
//!
//! Run with: `cargo run --example scripted_landing`

use perch_rl::prelude::*;
use tracing_subscriber::EnvFilter;

/// Pick the next action from the relative pose: correct the larger
/// horizontal error first, then descend, then land.
fn policy(relative: &Pose) -> Action {
    let p = relative.position;
    if p.x.abs() > 0.3 || p.y.abs() > 0.3 {
        if p.x.abs() >= p.y.abs() {
            if p.x > 0.0 {
                Action::Backward
            } else {
                Action::Forward
            }
        } else if p.y > 0.0 {
            Action::Right
        } else {
            Action::Left
        }
    } else if p.z > 1.0 {
        Action::Descend
    } else {
        Action::Land
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = EnvConfig::default();
    let dt = config.tick_period().as_secs_f64();
    let env = LandingEnv::new(config).expect("default config is valid");
    let world = SimWorld::new(dt).with_vehicle(Pose::from_position(1.0, -0.8, 8.0));

    let mut runner = TickRunner::new(env, ResetSampler::new(), world);
    let handle = runner.handle();

    // Prime the status snapshot before consulting the policy.
    runner.tick();

    let mut ticks = 1;
    while !handle.outcome().done && ticks < 5000 {
        handle.request_command(policy(&handle.relative_pose()));
        runner.tick();
        runner.world_mut().step();
        ticks += 1;
    }

    let outcome = handle.outcome();
    println!(
        "landed after {ticks} ticks: reward={:.1} wrong_altitude={}",
        outcome.reward, outcome.wrong_altitude
    );
}

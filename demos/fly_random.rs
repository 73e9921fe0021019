//! Random-policy driver.
//!
//! Flies the simulated world with uniformly random actions for a handful of
//! episodes and prints each episode's outcome. Useful as a smoke test of
//! the full control loop and as a baseline for shaped-reward statistics.
//!
//! Run with: `cargo run --example fly_random`

use perch_rl::prelude::*;
use rand::Rng;
use tracing_subscriber::EnvFilter;

const EPISODES: usize = 5;
const MAX_TICKS_PER_EPISODE: usize = 3000;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = EnvConfig::default();
    let dt = config.tick_period().as_secs_f64();
    let env = LandingEnv::new(config).expect("default config is valid");
    let world = SimWorld::new(dt).with_vehicle(Pose::from_position(0.0, 0.0, 10.0));

    let mut runner = TickRunner::new(env, ResetSampler::new(), world).with_recorder(100_000);
    let handle = runner.handle();
    let mut rng = rand::thread_rng();

    for episode in 0..EPISODES {
        let mut total_reward = 0.0;
        let mut ticks = 0;

        while !handle.outcome().done && ticks < MAX_TICKS_PER_EPISODE {
            // Re-roll the action every ~10 ticks so motion has time to show.
            if ticks % 10 == 0 {
                let action = Action::from_index(rng.gen_range(0..Action::ALL.len()));
                handle.request_command(action);
            }
            runner.tick();
            runner.world_mut().step();
            total_reward += handle.outcome().reward;
            ticks += 1;
        }

        let outcome = handle.outcome();
        println!(
            "episode {episode}: ticks={ticks} done={} reward={:.2} total={total_reward:.2} wrong_altitude={}",
            outcome.done, outcome.reward, outcome.wrong_altitude
        );

        handle.request_reset();
        runner.tick();
    }

    println!(
        "recorded {} transitions over {} ticks",
        runner.recorder().map(|r| r.len()).unwrap_or(0),
        runner.ticks()
    );
}

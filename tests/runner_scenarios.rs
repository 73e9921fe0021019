//! Full-loop scenarios: the tick runner driving the simulated world.

use anyhow::{anyhow, Result};
use perch_rl::prelude::*;

fn runner_with_vehicle(x: f64, y: f64, z: f64) -> TickRunner<SimWorld> {
    let config = EnvConfig::default();
    let dt = config.tick_period().as_secs_f64();
    let env = LandingEnv::new(config).unwrap();
    let world = SimWorld::new(dt).with_vehicle(Pose::from_position(x, y, z));
    TickRunner::new(env, ResetSampler::seeded(17), world)
}

#[test]
fn scripted_descent_lands_successfully() {
    let mut runner = runner_with_vehicle(0.0, 0.0, 5.0);
    let handle = runner.handle();

    handle.request_command(Action::Descend);
    runner.tick();
    runner.world_mut().step();

    let mut ticks = 0;
    while handle.relative_pose().position.z > 1.0 && ticks < 2000 {
        runner.tick();
        runner.world_mut().step();
        ticks += 1;
    }
    assert!(ticks < 2000, "descent should reach the landing zone in time");
    assert!(!handle.outcome().done, "still airborne inside the zone");

    handle.request_command(Action::Land);
    runner.tick();

    let outcome = handle.outcome();
    assert!(outcome.done);
    assert_eq!(outcome.reward, 100.0);
    assert!(!outcome.wrong_altitude);
}

#[test]
fn flying_sideways_exits_the_flight_zone() {
    let mut runner = runner_with_vehicle(0.0, 0.0, 5.0);
    let handle = runner.handle();

    handle.request_command(Action::Forward);
    let mut ticks = 0;
    while !handle.outcome().done && ticks < 2000 {
        runner.tick();
        runner.world_mut().step();
        ticks += 1;
    }

    let outcome = handle.outcome();
    assert!(outcome.done, "leaving the flight zone must end the episode");
    assert_eq!(outcome.reward, -100.0);
    assert!(!outcome.wrong_altitude);
    assert!(
        runner.world().vehicle().position.x > 1.5,
        "vehicle should actually be past the boundary"
    );
}

#[test]
fn reset_respawns_inside_the_sampling_band() {
    let mut runner = runner_with_vehicle(5.0, 5.0, 10.0);
    let handle = runner.handle();

    runner.tick();
    assert!(handle.outcome().done);

    handle.request_reset();
    runner.tick();

    assert_eq!(handle.episode(), 1);
    let spawn = runner.world().vehicle().position;
    assert!(spawn.x.abs() <= 1.5 && spawn.y.abs() <= 1.5);
    assert!((2.5..=18.5).contains(&spawn.z));
    assert!(!handle.outcome().done, "new episode starts clean");
}

#[test]
fn shaping_grows_as_the_vehicle_descends() {
    let mut runner = runner_with_vehicle(0.0, 0.0, 10.0);
    let handle = runner.handle();

    handle.request_command(Action::Descend);
    runner.tick();
    let early = handle.outcome().reward;

    for _ in 0..300 {
        runner.tick();
        runner.world_mut().step();
    }
    let later = handle.outcome().reward;

    assert!(!handle.outcome().done);
    assert!(
        later > early,
        "shaping should increase on approach: early {early}, later {later}"
    );
}

#[test]
fn recorder_spans_episode_boundaries() {
    let mut runner = runner_with_vehicle(5.0, 5.0, 10.0).with_recorder(1000);
    let handle = runner.handle();

    runner.tick();
    handle.request_reset();
    runner.tick();
    runner.tick();

    let recorder = runner.recorder().unwrap();
    let episodes: Vec<usize> = recorder.iter().map(|t| t.episode).collect();
    assert_eq!(
        episodes,
        vec![0, 0, 1],
        "transitions carry the episode index current at record time"
    );
    assert!(recorder.iter().next().unwrap().done);
}

/// World wrapper whose spawn application fails a set number of times.
struct FlakyWorld {
    inner: SimWorld,
    spawn_failures: usize,
}

impl TelemetrySource for FlakyWorld {
    fn vehicle_pose(&self) -> Option<Pose> {
        self.inner.vehicle_pose()
    }
    fn target_pose(&self) -> Option<Pose> {
        self.inner.target_pose()
    }
    fn landed_signal(&self) -> bool {
        self.inner.landed_signal()
    }
}

impl FlightActuator for FlakyWorld {
    fn dispatch_velocity(&mut self, twist: Twist) -> Result<()> {
        self.inner.dispatch_velocity(twist)
    }
    fn dispatch_takeoff(&mut self) -> Result<()> {
        self.inner.dispatch_takeoff()
    }
    fn dispatch_land(&mut self) -> Result<()> {
        self.inner.dispatch_land()
    }
}

impl WorldControl for FlakyWorld {
    fn apply_spawn_pose(&mut self, pose: Pose) -> Result<()> {
        if self.spawn_failures > 0 {
            self.spawn_failures -= 1;
            return Err(anyhow!("world busy"));
        }
        self.inner.apply_spawn_pose(pose)
    }
}

#[test]
fn failed_reset_is_retried_on_the_next_tick() {
    let config = EnvConfig::default();
    let dt = config.tick_period().as_secs_f64();
    let env = LandingEnv::new(config).unwrap();
    let world = FlakyWorld {
        inner: SimWorld::new(dt).with_vehicle(Pose::from_position(5.0, 5.0, 10.0)),
        spawn_failures: 1,
    };
    let mut runner = TickRunner::new(env, ResetSampler::seeded(23), world);
    let handle = runner.handle();

    runner.tick();
    assert!(handle.outcome().done);

    handle.request_reset();
    runner.tick();
    assert_eq!(handle.episode(), 0, "failed application keeps the episode");

    // The request was not dropped; the next tick retries and succeeds.
    runner.tick();
    assert_eq!(handle.episode(), 1);
    let spawn = runner.world().inner.vehicle().position;
    assert!(spawn.x.abs() <= 1.5 && spawn.y.abs() <= 1.5);
}

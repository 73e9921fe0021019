//! Discrete action set for the landing agent
//!
//! The training driver selects one of a closed set of flight actions each
//! step. Every action maps totally onto a flight command; anything the
//! driver sends that does not name a known action resolves to [`Action::Hover`]
//! rather than falling through.

use serde::{Deserialize, Serialize};

use crate::env::config::EnvConfig;
use crate::geometry::pose::Twist;

/// Discrete flight action selected by the training driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Strafe left (+y body frame).
    Left,
    /// Strafe right (-y body frame).
    Right,
    /// Move forward (+x body frame).
    Forward,
    /// Move backward (-x body frame).
    Backward,
    /// Diagonal left + forward.
    LeftForward,
    /// Diagonal right + forward.
    RightForward,
    /// Diagonal left + backward.
    LeftBackward,
    /// Diagonal right + backward.
    RightBackward,
    /// Climb at the configured climb speed.
    Ascend,
    /// Descend at the configured descent speed.
    Descend,
    /// Yaw counterclockwise.
    RotateLeft,
    /// Yaw clockwise.
    RotateRight,
    /// Request a platform takeoff.
    Takeoff,
    /// Request a platform landing.
    Land,
    /// Hold position. Also the fallback for unrecognized input.
    #[default]
    Hover,
}

/// Command released to the flight-control layer, at most one per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightCommand {
    /// Platform takeoff request.
    Takeoff,
    /// Platform landing request.
    Land,
    /// Velocity setpoint for continuous motion.
    Move(Twist),
}

impl Action {
    /// Every action, in wire-index order.
    pub const ALL: [Action; 15] = [
        Action::Left,
        Action::Right,
        Action::Forward,
        Action::Backward,
        Action::LeftForward,
        Action::RightForward,
        Action::LeftBackward,
        Action::RightBackward,
        Action::Ascend,
        Action::Descend,
        Action::RotateLeft,
        Action::RotateRight,
        Action::Takeoff,
        Action::Land,
        Action::Hover,
    ];

    /// Create an action from a driver-side index; out-of-range maps to hover.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Action::Hover)
    }

    /// Parse a wire command name; unrecognized names map to hover.
    pub fn from_name(name: &str) -> Self {
        match name {
            "left" => Action::Left,
            "right" => Action::Right,
            "forward" => Action::Forward,
            "backward" => Action::Backward,
            "left_forward" => Action::LeftForward,
            "right_forward" => Action::RightForward,
            "left_backward" => Action::LeftBackward,
            "right_backward" => Action::RightBackward,
            "ascend" => Action::Ascend,
            "descend" => Action::Descend,
            "rotate_left" => Action::RotateLeft,
            "rotate_right" => Action::RotateRight,
            "takeoff" => Action::Takeoff,
            "land" => Action::Land,
            _ => Action::Hover,
        }
    }

    /// Wire command name for this action.
    pub fn name(self) -> &'static str {
        match self {
            Action::Left => "left",
            Action::Right => "right",
            Action::Forward => "forward",
            Action::Backward => "backward",
            Action::LeftForward => "left_forward",
            Action::RightForward => "right_forward",
            Action::LeftBackward => "left_backward",
            Action::RightBackward => "right_backward",
            Action::Ascend => "ascend",
            Action::Descend => "descend",
            Action::RotateLeft => "rotate_left",
            Action::RotateRight => "rotate_right",
            Action::Takeoff => "takeoff",
            Action::Land => "land",
            Action::Hover => "hover",
        }
    }

    /// Total mapping from action to flight command.
    ///
    /// Movement actions build the full twist from scratch each time, so no
    /// velocity component can leak across from a previous command.
    pub fn command(self, config: &EnvConfig) -> FlightCommand {
        let v = config.cruise_speed;
        match self {
            Action::Left => FlightCommand::Move(Twist::linear(0.0, v, 0.0)),
            Action::Right => FlightCommand::Move(Twist::linear(0.0, -v, 0.0)),
            Action::Forward => FlightCommand::Move(Twist::linear(v, 0.0, 0.0)),
            Action::Backward => FlightCommand::Move(Twist::linear(-v, 0.0, 0.0)),
            Action::LeftForward => FlightCommand::Move(Twist::linear(v, v, 0.0)),
            Action::RightForward => FlightCommand::Move(Twist::linear(v, -v, 0.0)),
            Action::LeftBackward => FlightCommand::Move(Twist::linear(-v, v, 0.0)),
            Action::RightBackward => FlightCommand::Move(Twist::linear(-v, -v, 0.0)),
            Action::Ascend => FlightCommand::Move(Twist::linear(0.0, 0.0, config.climb_speed)),
            Action::Descend => {
                FlightCommand::Move(Twist::linear(0.0, 0.0, -config.descent_speed))
            }
            Action::RotateLeft => FlightCommand::Move(Twist::yaw_rate(config.yaw_rate)),
            Action::RotateRight => FlightCommand::Move(Twist::yaw_rate(-config.yaw_rate)),
            Action::Takeoff => FlightCommand::Takeoff,
            Action::Land => FlightCommand::Land,
            Action::Hover => FlightCommand::Move(Twist::zero()),
        }
    }
}

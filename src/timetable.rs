#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The direction of travel along the track axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TravelDirection {
    Forward,
    Reverse,
}

impl TravelDirection {
    /// The sign of the direction along the track axis.
    pub fn sign(self) -> f64 {
        match self {
            TravelDirection::Forward => 1.0,
            TravelDirection::Reverse => -1.0,
        }
    }
}

/// A stop or passing point on a scripted train's timetable.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    /// The track coordinate of the waypoint, in m.
    pub position: f64,
    /// The speed to hold once clear of the waypoint, in m/s.
    pub target_speed: f64,
    /// The speed through the waypoint, in m/s. Zero at a stop.
    pub passing_speed: f64,
    /// The magnitude of the acceleration away from the waypoint, in m/s^2.
    /// Zero makes the speed change instantaneous.
    pub accelerate: f64,
    /// The magnitude of the deceleration into the waypoint, in m/s^2.
    /// Zero makes the speed change instantaneous.
    pub decelerate: f64,
    /// The direction of travel away from the waypoint.
    /// Ignored unless `is_stop` is set; only a stop may change direction.
    pub direction: TravelDirection,
    /// The time spent stationary at a stop, in s.
    pub dwell_time: f64,
    /// Whether the left doors open during the stop.
    pub open_left_doors: bool,
    /// Whether the right doors open during the stop.
    pub open_right_doors: bool,
    /// The rail served from this waypoint onward.
    pub rail_index: usize,
    /// Whether the train comes to a stand here.
    pub is_stop: bool,
}

impl Waypoint {
    /// Creates a stop waypoint with no dwell and the doors kept shut.
    pub fn stop(
        position: f64,
        target_speed: f64,
        accelerate: f64,
        decelerate: f64,
        direction: TravelDirection,
    ) -> Self {
        Self {
            position,
            target_speed,
            passing_speed: 0.0,
            accelerate,
            decelerate,
            direction,
            dwell_time: 0.0,
            open_left_doors: false,
            open_right_doors: false,
            rail_index: 0,
            is_stop: true,
        }
    }

    /// Creates a waypoint travelled through at `passing_speed` without stopping.
    pub fn pass(
        position: f64,
        passing_speed: f64,
        target_speed: f64,
        accelerate: f64,
        decelerate: f64,
    ) -> Self {
        Self {
            position,
            target_speed,
            passing_speed,
            accelerate,
            decelerate,
            direction: TravelDirection::Forward,
            dwell_time: 0.0,
            open_left_doors: false,
            open_right_doors: false,
            rail_index: 0,
            is_stop: false,
        }
    }

    /// Sets the dwell time and the door sides opened during it.
    pub fn with_dwell(mut self, dwell_time: f64, left_doors: bool, right_doors: bool) -> Self {
        self.dwell_time = dwell_time;
        self.open_left_doors = left_doors;
        self.open_right_doors = right_doors;
        self
    }

    /// Sets the rail served from this waypoint onward.
    pub fn on_rail(mut self, rail_index: usize) -> Self {
        self.rail_index = rail_index;
        self
    }
}

use crate::timetable::Waypoint;
use crate::trajectory::{Trajectory, TrajectorySample};
use crate::train::{ReverserPosition, TrackFollower, Train};
use crate::util::Interval;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The controller that steers a train.
pub enum Driver {
    /// Follows a precomputed kinematic trajectory through a timetable.
    Scripted(ScriptedDriver),
    /// Interpolates between timed position markers.
    Marker(MarkerDriver),
}

impl Driver {
    /// Advances the train by one tick. Returns whether the train has
    /// left service and should be removed from the simulation.
    pub(crate) fn trigger(&mut self, now: f64, dt: f64, train: &mut Train) -> bool {
        match self {
            Driver::Scripted(driver) => driver.trigger(now, dt, train),
            Driver::Marker(driver) => driver.trigger(now, train),
        }
    }
}

/// A driver that works a timetable by sampling a kinematic trajectory
/// planned over it.
///
/// The trajectory is planned on the first processed tick, so the plan
/// is anchored to the time the train comes alive rather than to the
/// time it was added to the simulation.
pub struct ScriptedDriver {
    /// The timetable being worked, in travel order.
    waypoints: Vec<Waypoint>,
    /// The trajectory planned over the timetable.
    trajectory: Option<Trajectory>,
    /// When the train entered service, in s.
    appearance_time: f64,
    /// When the train leaves service, in s.
    leave_time: f64,
    /// The time of the last processed tick, in s.
    last_processed: f64,
    /// The track coordinate the train sat at after the last tick, in m.
    position: f64,
}

impl ScriptedDriver {
    /// Creates a driver for the given timetable. The first waypoint
    /// must be a stop; it is where the train waits to enter service.
    pub(crate) fn new(waypoints: Vec<Waypoint>) -> Self {
        Self {
            waypoints,
            trajectory: None,
            appearance_time: 0.0,
            leave_time: 0.0,
            last_processed: 0.0,
            position: 0.0,
        }
    }

    fn trigger(&mut self, now: f64, dt: f64, train: &mut Train) -> bool {
        // A journey needs at least two waypoints. A tick at the exact
        // time of the last one carries no new information, and since
        // `last_processed` starts at zero this also keeps the train
        // dormant until the clock has advanced.
        if self.waypoints.len() < 2 || now == self.last_processed {
            return false;
        }

        if self.last_processed == 0.0 {
            self.appearance_time = now;
            self.leave_time = now + train.leave_time();
            self.trajectory = Some(Trajectory::new(&self.waypoints, train.door_timing(), now));
            self.position = self.waypoints[0].position;
            debug!("scripted train entered service at {:.1}s", now);
        }

        self.last_processed = now;

        if self.leave_time > self.appearance_time && now >= self.leave_time {
            return true;
        }

        // Built by the block above on the first processed tick.
        let trajectory = self.trajectory.as_ref().unwrap();
        let sample = trajectory.sample(now);
        let delta = sample.position - self.position;

        if delta < 0.0 {
            train.set_reverser(ReverserPosition::Reverse);
        } else if delta > 0.0 {
            train.set_reverser(ReverserPosition::Forward);
        }

        train.open_doors(sample.open_left_doors, sample.open_right_doors);
        train.close_doors(!sample.open_left_doors, !sample.open_right_doors);

        if dt != 0.0 {
            let speed = delta / dt;
            let acceleration = sample.direction.sign() * (speed - train.speed()) / dt;
            train.set_motion(speed, acceleration);
        } else {
            train.set_motion(0.0, 0.0);
        }
        train.set_mileage(sample.mileage);

        // Rails are assigned from the follower positions of the last
        // tick, measured against the datum before the cars move.
        for car in train.cars_mut() {
            set_rail_index(trajectory, &sample, self.position, &mut car.front_axle);
            set_rail_index(trajectory, &sample, self.position, &mut car.rear_axle);
        }
        train.move_cars(delta);

        self.position = sample.position;
        false
    }
}

fn set_rail_index(
    trajectory: &Trajectory,
    sample: &TrajectorySample,
    datum: f64,
    follower: &mut TrackFollower,
) {
    let offset = sample.direction.sign() * (follower.track_position - datum);
    follower.rail_index = trajectory.rail_index_at(sample.mileage + offset);
}

/// A timed position marker for a marker-driven train.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkerInstruction {
    /// The track coordinate to be at, in m.
    pub position: f64,
    /// The absolute time to be there, in s.
    pub time: f64,
}

/// A driver that drags its train between timed position markers by
/// linear interpolation, with no kinematics at all.
///
/// Marker trains only exist to be seen from elsewhere, so they are
/// repositioned at a coarse interval rather than every tick.
pub struct MarkerDriver {
    /// The position markers, in schedule order.
    instructions: Vec<MarkerInstruction>,
    /// The time of the last processed tick, in s.
    last_processed: f64,
    /// The time between processed ticks, in s.
    interval: f64,
}

impl MarkerDriver {
    pub(crate) fn new(instructions: Vec<MarkerInstruction>) -> Self {
        Self {
            instructions,
            last_processed: 0.0,
            interval: 1.0,
        }
    }

    fn trigger(&mut self, now: f64, train: &mut Train) -> bool {
        if now - self.last_processed < self.interval {
            return false;
        }
        self.last_processed = now;
        self.interval = 5.0;

        if self.instructions.last().map_or(true, |last| now > last.time) {
            return true;
        }

        // Bracket the current time: the last marker already passed,
        // and the first one after it.
        let a = self
            .instructions
            .iter()
            .rposition(|instruction| instruction.time < now)
            .unwrap_or(0);
        let a = self.instructions[a];
        let b = self
            .instructions
            .iter()
            .position(|instruction| instruction.time > a.time)
            .unwrap_or(self.instructions.len() - 1);
        let b = self.instructions[b];

        let times = Interval::new(a.time, b.time);
        let r = if times.length() > 0.0 {
            times.inv_lerp(now).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let target = Interval::new(a.position, b.position).lerp(r);

        let delta = target - train.cars()[0].front_axle.track_position;
        train.move_cars(delta);
        false
    }
}

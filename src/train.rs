use crate::trajectory::DoorTiming;
use smallvec::SmallVec;

/// The attributes of a scripted train.
#[derive(Clone, Copy, Debug)]
pub struct TrainAttributes {
    /// The number of cars.
    pub car_count: usize,
    /// The length of each car, in m.
    pub car_length: f64,
    /// The door opening rate, in 1/s. Zero leaves the panels parked.
    pub door_open_frequency: f64,
    /// The door closing rate, in 1/s. Zero leaves the panels parked.
    pub door_close_frequency: f64,
    /// How long the train stays in service once it has entered it, in s.
    /// Zero or negative keeps it in service indefinitely.
    pub leave_time: f64,
}

/// The position of the reverser handle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReverserPosition {
    Reverse,
    #[default]
    Neutral,
    Forward,
}

/// A point of contact between a car and the track.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackFollower {
    /// The track coordinate, in m.
    pub track_position: f64,
    /// The rail the follower rides on.
    pub rail_index: usize,
}

/// The door panels on one side of a car.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Door {
    /// How far the panels have travelled, from 0 (shut) to 1 (fully open).
    pub state: f64,
    /// Whether the panels are commanded open.
    pub anticipated_open: bool,
}

/// A single car of a train.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Car {
    /// The follower under the leading end of the car.
    pub front_axle: TrackFollower,
    /// The follower under the trailing end of the car.
    pub rear_axle: TrackFollower,
    /// The door panels on the left side.
    pub left_door: Door,
    /// The door panels on the right side.
    pub right_door: Door,
}

/// A train whose movement is dictated by a driver rather than by
/// traction physics.
#[derive(Clone, Debug)]
pub struct Train {
    /// The attributes of the train.
    attributes: TrainAttributes,
    /// The cars, head first.
    cars: SmallVec<[Car; 4]>,
    /// The signed speed, in m/s. Negative when running in reverse.
    speed: f64,
    /// The acceleration along the direction of travel, in m/s^2.
    acceleration: f64,
    /// The distance travelled in service, in m.
    mileage: f64,
    /// The reverser position.
    reverser: ReverserPosition,
}

impl Train {
    /// Creates a stationary train with its cars in default positions.
    pub(crate) fn new(attributes: TrainAttributes) -> Self {
        let cars = (0..attributes.car_count).map(|_| Car::default()).collect();
        Self {
            attributes,
            cars,
            speed: 0.0,
            acceleration: 0.0,
            mileage: 0.0,
            reverser: ReverserPosition::Neutral,
        }
    }

    /// The cars of the train, head first.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub(crate) fn cars_mut(&mut self) -> &mut [Car] {
        &mut self.cars
    }

    /// The length of each car, in m.
    pub fn car_length(&self) -> f64 {
        self.attributes.car_length
    }

    /// The track coordinate of the front of the train, in m.
    pub fn front_position(&self) -> f64 {
        self.cars[0].front_axle.track_position + 0.1 * self.attributes.car_length
    }

    /// The signed speed of the train, in m/s. Negative when running
    /// in reverse.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// The acceleration of the train along its direction of travel,
    /// in m/s^2.
    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    /// The distance the train has travelled in service, in m. Grows
    /// whichever way the train is moving.
    pub fn mileage(&self) -> f64 {
        self.mileage
    }

    /// The position of the reverser handle.
    pub fn reverser(&self) -> ReverserPosition {
        self.reverser
    }

    /// How long the train stays in service, in s. Zero or negative
    /// keeps it in service indefinitely.
    pub(crate) fn leave_time(&self) -> f64 {
        self.attributes.leave_time
    }

    /// The door phase durations implied by the door frequencies.
    pub(crate) fn door_timing(&self) -> DoorTiming {
        DoorTiming::from_frequencies(
            self.attributes.door_open_frequency,
            self.attributes.door_close_frequency,
            0.0,
        )
    }

    /// Stands the cars head to tail with the front of the train at
    /// `position`. Axles sit 0.1 and 0.9 of a car length behind the
    /// leading end of their car.
    pub(crate) fn place_cars(&mut self, position: f64) {
        let length = self.attributes.car_length;
        let mut reference = position;
        for car in &mut self.cars {
            car.front_axle.track_position = reference - 0.1 * length;
            car.rear_axle.track_position = reference - 0.9 * length;
            reference -= length;
        }
    }

    /// Shifts every follower of every car by the travelled distance.
    pub(crate) fn move_cars(&mut self, delta: f64) {
        for car in &mut self.cars {
            car.front_axle.track_position += delta;
            car.rear_axle.track_position += delta;
        }
    }

    pub(crate) fn set_motion(&mut self, speed: f64, acceleration: f64) {
        self.speed = speed;
        self.acceleration = acceleration;
    }

    pub(crate) fn set_mileage(&mut self, mileage: f64) {
        self.mileage = mileage;
    }

    pub(crate) fn set_reverser(&mut self, reverser: ReverserPosition) {
        self.reverser = reverser;
    }

    /// Commands the doors on the given sides open. The panels take
    /// time to follow.
    pub(crate) fn open_doors(&mut self, left: bool, right: bool) {
        for car in &mut self.cars {
            if left {
                car.left_door.anticipated_open = true;
            }
            if right {
                car.right_door.anticipated_open = true;
            }
        }
    }

    /// Commands the doors on the given sides closed.
    pub(crate) fn close_doors(&mut self, left: bool, right: bool) {
        for car in &mut self.cars {
            if left {
                car.left_door.anticipated_open = false;
            }
            if right {
                car.right_door.anticipated_open = false;
            }
        }
    }

    /// Moves the door panels towards their commanded state.
    pub(crate) fn update_doors(&mut self, dt: f64) {
        let opening = self.attributes.door_open_frequency * dt;
        let closing = self.attributes.door_close_frequency * dt;
        for car in &mut self.cars {
            for door in [&mut car.left_door, &mut car.right_door] {
                if door.anticipated_open {
                    door.state = (door.state + opening).min(1.0);
                } else {
                    door.state = (door.state - closing).max(0.0);
                }
            }
        }
    }
}

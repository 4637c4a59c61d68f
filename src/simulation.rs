use crate::debug::debug_train;
#[cfg(feature = "debug")]
use crate::debug::take_debug_frame;
use crate::driver::{Driver, MarkerDriver, MarkerInstruction, ScriptedDriver};
use crate::timetable::Waypoint;
use crate::train::{Train, TrainAttributes};
use crate::TrainId;
use log::debug;
use slotmap::SlotMap;

/// A train and the driver that steers it.
struct TrainUnit {
    train: Train,
    driver: Driver,
}

type TrainSet = SlotMap<TrainId, TrainUnit>;

/// A scripted railway simulation.
#[derive(Default)]
pub struct Simulation {
    /// The trains in service.
    trains: TrainSet,
    /// The in-game clock, in s.
    time: f64,
    /// Debugging information from the previously simulated frame.
    #[cfg(feature = "debug")]
    debug: serde_json::Value,
}

impl Simulation {
    /// Creates a new simulation with its clock at zero.
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a new simulation with its clock already advanced, for
    /// hosts that keep an absolute clock such as seconds since midnight.
    pub fn with_time(time: f64) -> Self {
        Self {
            time,
            ..Default::default()
        }
    }

    /// Adds a scripted train standing at the first waypoint of its
    /// timetable. It enters service on the first tick after the clock
    /// has advanced, and works the timetable from that moment.
    ///
    /// The timetable must be non-empty and begin with a stop.
    pub fn add_train(&mut self, attributes: &TrainAttributes, waypoints: Vec<Waypoint>) -> TrainId {
        let mut train = Train::new(*attributes);
        train.place_cars(waypoints[0].position);
        for car in train.cars_mut() {
            car.front_axle.rail_index = waypoints[0].rail_index;
            car.rear_axle.rail_index = waypoints[0].rail_index;
        }
        let driver = Driver::Scripted(ScriptedDriver::new(waypoints));
        self.trains.insert(TrainUnit { train, driver })
    }

    /// Adds a train that is dragged between timed position markers
    /// instead of working a timetable.
    pub fn add_marker_train(
        &mut self,
        attributes: &TrainAttributes,
        instructions: Vec<MarkerInstruction>,
    ) -> TrainId {
        let mut train = Train::new(*attributes);
        if let Some(first) = instructions.first() {
            train.place_cars(first.position);
        }
        let driver = Driver::Marker(MarkerDriver::new(instructions));
        self.trains.insert(TrainUnit { train, driver })
    }

    /// Removes a train from the simulation.
    pub fn remove_train(&mut self, id: TrainId) {
        self.trains.remove(id);
    }

    /// Advances the clock by `dt` seconds and moves every train to
    /// where its driver says it should now be. Trains whose drivers
    /// report them out of service are removed.
    pub fn step(&mut self, dt: f64) {
        self.time += dt;
        let now = self.time;

        self.trains.retain(|id, unit| {
            if unit.driver.trigger(now, dt, &mut unit.train) {
                debug!("train {:?} left service at {:.1}s", id, now);
                return false;
            }
            unit.train.update_doors(dt);
            debug_train(id, &unit.train);
            true
        });

        #[cfg(feature = "debug")]
        {
            self.debug = take_debug_frame();
        }
    }

    /// The in-game time, in s.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns an iterator over all the trains in service.
    pub fn iter_trains(&self) -> impl Iterator<Item = (TrainId, &Train)> {
        self.trains.iter().map(|(id, unit)| (id, &unit.train))
    }

    /// Gets a reference to the train with the given ID.
    pub fn get_train(&self, id: TrainId) -> &Train {
        &self.trains[id].train
    }

    /// Gets the debugging information for the previously simulated frame as JSON array.
    #[cfg(feature = "debug")]
    pub fn debug(&self) -> serde_json::Value {
        self.debug.clone()
    }
}

pub use driver::MarkerInstruction;
pub use simulation::Simulation;
use slotmap::new_key_type;
pub use slotmap::{Key, KeyData};
pub use timetable::{TravelDirection, Waypoint};
pub use train::{Car, Door, ReverserPosition, TrackFollower, Train, TrainAttributes};
pub use trajectory::{DoorTiming, Trajectory, TrajectorySample};
pub use util::Interval;

mod debug;
mod driver;
mod simulation;
mod timetable;
mod train;
mod trajectory;
mod util;

new_key_type! {
    /// Unique ID of a [Train].
    pub struct TrainId;
}

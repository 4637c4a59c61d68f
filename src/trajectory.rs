use crate::timetable::{TravelDirection, Waypoint};
use itertools::Itertools;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Durations of the door phases at a stop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoorTiming {
    /// Time taken to fully open the doors, in s.
    pub opening: f64,
    /// Time taken to fully close the doors, in s.
    pub closing: f64,
}

impl DoorTiming {
    /// Derives the door phase durations from a car's door open/close
    /// frequencies, falling back to `default` where a frequency is zero.
    pub fn from_frequencies(open_frequency: f64, close_frequency: f64, default: f64) -> Self {
        Self {
            opening: if open_frequency != 0.0 {
                1.0 / open_frequency
            } else {
                default
            },
            closing: if close_frequency != 0.0 {
                1.0 / close_frequency
            } else {
                default
            },
        }
    }
}

/// The state of a planned train at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrajectorySample {
    /// The track coordinate, in m.
    pub position: f64,
    /// The cumulative distance travelled, in m.
    pub mileage: f64,
    /// The direction of travel.
    pub direction: TravelDirection,
    /// Whether the left doors are open.
    pub open_left_doors: bool,
    /// Whether the right doors are open.
    pub open_right_doors: bool,
}

/// A waypoint annotated with its planned phase boundaries.
///
/// `decelerate` is stored signed: negative when slowing into the
/// waypoint, which keeps the phase formulas uniform when a repaired
/// rate comes out with the opposite sign.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Node {
    /// The track coordinate of the waypoint, in m.
    position: f64,
    /// The speed to hold once clear of the waypoint, in m/s.
    target_speed: f64,
    /// The speed through the waypoint, in m/s. Zero at a stop.
    passing_speed: f64,
    /// The acceleration away from the waypoint, in m/s^2.
    accelerate: f64,
    /// The deceleration into the waypoint, in m/s^2. Non-positive
    /// unless repaired.
    decelerate: f64,
    /// The direction of travel away from the waypoint.
    direction: TravelDirection,
    /// The time spent stationary at a stop, in s.
    dwell_time: f64,
    /// Whether the left doors open during the stop.
    open_left_doors: bool,
    /// Whether the right doors open during the stop.
    open_right_doors: bool,
    /// The rail served from this waypoint onward.
    rail_index: usize,
    /// Whether the train comes to a stand here.
    is_stop: bool,
    /// Where braking into the waypoint begins, in m.
    deceleration_start_position: f64,
    /// When braking into the waypoint begins, in s.
    deceleration_start_time: f64,
    /// When the train reaches the waypoint, in s.
    arrival_time: f64,
    /// When the doors finish opening, in s.
    opening_end_time: f64,
    /// When the doors start closing, in s.
    closing_start_time: f64,
    /// When the train pulls away, in s.
    departure_time: f64,
    /// Where the pull-away acceleration ends, in m.
    acceleration_end_position: f64,
    /// When the pull-away acceleration ends, in s.
    acceleration_end_time: f64,
    /// The cumulative distance travelled on arrival, in m.
    mileage: f64,
}

impl Node {
    fn new(waypoint: &Waypoint) -> Self {
        Self {
            position: waypoint.position,
            target_speed: waypoint.target_speed,
            passing_speed: waypoint.passing_speed,
            accelerate: waypoint.accelerate,
            decelerate: -waypoint.decelerate,
            direction: waypoint.direction,
            dwell_time: waypoint.dwell_time,
            open_left_doors: waypoint.open_left_doors,
            open_right_doors: waypoint.open_right_doors,
            rail_index: waypoint.rail_index,
            is_stop: waypoint.is_stop,
            deceleration_start_position: 0.0,
            deceleration_start_time: 0.0,
            arrival_time: 0.0,
            opening_end_time: 0.0,
            closing_start_time: 0.0,
            departure_time: 0.0,
            acceleration_end_position: 0.0,
            acceleration_end_time: 0.0,
            mileage: 0.0,
        }
    }
}

/// A precomputed kinematic travel plan.
///
/// Built once from a timetable, then only sampled. The first waypoint
/// must be a stop; it is where the train stands at `start_time`.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    /// The planned waypoints in travel order.
    nodes: Vec<Node>,
    /// The door phase durations.
    timing: DoorTiming,
}

impl Trajectory {
    /// Plans a trajectory over the given waypoints, repairing any
    /// overlapping speed change zones.
    pub fn new(waypoints: &[Waypoint], timing: DoorTiming, start_time: f64) -> Self {
        let nodes = waypoints.iter().map(Node::new).collect();
        let mut trajectory = Self { nodes, timing };
        trajectory.plan(start_time);
        trajectory.validate(start_time);
        trajectory
    }

    /// Computes the phase boundary positions and times of every waypoint.
    fn plan(&mut self, start_time: f64) {
        // Positions of the phase boundaries, and waypoint mileages.
        // The start point does not slow down, so it only accelerates.
        {
            let first = &mut self.nodes[0];
            first.mileage = 0.0;
            let delta = if first.accelerate != 0.0 {
                first.target_speed.powi(2) / (2.0 * first.accelerate)
            } else {
                0.0
            };
            first.acceleration_end_position = first.position + first.direction.sign() * delta;
        }
        let mut direction = self.nodes[0].direction;
        for i in 1..self.nodes.len() {
            let prev = self.nodes[i - 1];
            let node = &mut self.nodes[i];

            let delta = if node.decelerate != 0.0 {
                (node.passing_speed.powi(2) - prev.target_speed.powi(2)) / (2.0 * node.decelerate)
            } else {
                0.0
            };
            node.deceleration_start_position = node.position - direction.sign() * delta;
            node.mileage = prev.mileage + (node.position - prev.position).abs();

            // Only a stop may change the direction of travel.
            if node.is_stop {
                direction = node.direction;
            }

            let delta = if node.accelerate != 0.0 {
                (node.target_speed.powi(2) - node.passing_speed.powi(2)) / (2.0 * node.accelerate)
            } else {
                0.0
            };
            node.acceleration_end_position = node.position + direction.sign() * delta;
        }

        // Times of the phase boundaries. Each departure trails its
        // arrival by the door opening, dwell and door closing phases.
        {
            let timing = self.timing;
            let first = &mut self.nodes[0];
            first.arrival_time = start_time;
            first.opening_end_time = first.arrival_time;
            if first.open_left_doors || first.open_right_doors {
                first.opening_end_time += timing.opening;
            }
            first.closing_start_time = first.opening_end_time + first.dwell_time;
            first.departure_time = first.closing_start_time;
            if first.open_left_doors || first.open_right_doors {
                first.departure_time += timing.closing;
            }
            let delta = if first.accelerate != 0.0 {
                first.target_speed / first.accelerate
            } else {
                0.0
            };
            first.acceleration_end_time = first.departure_time + delta;
        }
        for i in 1..self.nodes.len() {
            let prev = self.nodes[i - 1];
            let timing = self.timing;
            let node = &mut self.nodes[i];

            let delta = if prev.target_speed != 0.0 {
                (node.deceleration_start_position - prev.acceleration_end_position).abs()
                    / prev.target_speed
            } else {
                0.0
            };
            node.deceleration_start_time = prev.acceleration_end_time + delta;

            let delta = if node.decelerate != 0.0 {
                (node.passing_speed - prev.target_speed) / node.decelerate
            } else {
                0.0
            };
            node.arrival_time = node.deceleration_start_time + delta;

            if node.is_stop {
                node.opening_end_time = node.arrival_time;
                if node.open_left_doors || node.open_right_doors {
                    node.opening_end_time += timing.opening;
                }
                node.closing_start_time = node.opening_end_time + node.dwell_time;
                node.departure_time = node.closing_start_time;
                if node.open_left_doors || node.open_right_doors {
                    node.departure_time += timing.closing;
                }
            } else {
                // A passing point is departed the instant it is reached.
                node.opening_end_time = node.arrival_time;
                node.closing_start_time = node.arrival_time;
                node.departure_time = node.arrival_time;
            }

            let delta = if node.accelerate != 0.0 {
                (node.target_speed - node.passing_speed) / node.accelerate
            } else {
                0.0
            };
            node.acceleration_end_time = node.departure_time + delta;
        }
    }

    /// Checks that no braking zone reaches back past the end of the
    /// previous acceleration zone. Where one does, both rates are
    /// recomputed over the distance separating the pair and the plan
    /// is rebuilt, exactly once.
    ///
    /// A pair at zero distance is left alone; so is a plan that would
    /// need a second repair after the rebuild.
    fn validate(&mut self, start_time: f64) {
        let mut direction = self.nodes[0].direction;
        let repairs = self
            .nodes
            .iter()
            .tuple_windows()
            .enumerate()
            .filter_map(|(i, (prev, node))| {
                // The braking zone must begin no earlier than the end of
                // the previous acceleration zone, along the travel direction.
                let overlaps = (prev.acceleration_end_position - node.deceleration_start_position)
                    * direction.sign()
                    > 0.0;
                if node.is_stop {
                    direction = node.direction;
                }
                let distance = (node.position - prev.position).abs();
                (overlaps && distance != 0.0).then(|| {
                    let accelerate =
                        (prev.target_speed.powi(2) - prev.passing_speed.powi(2)) / distance;
                    let decelerate =
                        (node.passing_speed.powi(2) - prev.target_speed.powi(2)) / distance;
                    (i, accelerate, decelerate)
                })
            })
            .collect::<SmallVec<[_; 4]>>();

        if repairs.is_empty() {
            return;
        }
        debug!(
            "travel plan has {} overlapping speed change zones, recomputing rates",
            repairs.len()
        );
        for (i, accelerate, decelerate) in repairs {
            self.nodes[i].accelerate = accelerate;
            self.nodes[i + 1].decelerate = decelerate;
        }
        self.plan(start_time);
    }

    /// Samples the plan at an absolute time.
    ///
    /// Runs in O(N) over the waypoints, which stay in the single digits
    /// to low tens for scripted trains.
    pub fn sample(&self, now: f64) -> TrajectorySample {
        let first = &self.nodes[0];
        let mut sample = TrajectorySample {
            position: first.position,
            mileage: first.mileage,
            direction: first.direction,
            open_left_doors: false,
            open_right_doors: false,
        };

        if now <= first.arrival_time {
            return sample;
        }

        if now <= first.closing_start_time {
            sample.open_left_doors = first.open_left_doors;
            sample.open_right_doors = first.open_right_doors;
            return sample;
        }

        if now <= first.departure_time {
            return sample;
        }

        // The start point does not slow down, so it only accelerates.
        if now <= first.acceleration_end_time {
            let dt = now - first.departure_time;
            let delta = 0.5 * first.accelerate * dt.powi(2);
            sample.mileage += delta;
            sample.position += sample.direction.sign() * delta;
            return sample;
        }
        sample.mileage += (first.acceleration_end_position - sample.position).abs();
        sample.position = first.acceleration_end_position;

        for i in 1..self.nodes.len() {
            let prev = &self.nodes[i - 1];
            let node = &self.nodes[i];

            if now <= node.deceleration_start_time {
                let dt = now - prev.acceleration_end_time;
                let delta = prev.target_speed * dt;
                sample.mileage += delta;
                sample.position += sample.direction.sign() * delta;
                return sample;
            }
            sample.mileage += (node.deceleration_start_position - sample.position).abs();
            sample.position = node.deceleration_start_position;

            if now <= node.arrival_time {
                let dt = now - node.deceleration_start_time;
                let delta = prev.target_speed * dt + 0.5 * node.decelerate * dt.powi(2);
                sample.mileage += delta;
                sample.position += sample.direction.sign() * delta;
                return sample;
            }

            sample.mileage = node.mileage;
            sample.position = node.position;
            if node.is_stop {
                sample.direction = node.direction;
            }

            if node.is_stop && now <= node.closing_start_time {
                sample.open_left_doors = node.open_left_doors;
                sample.open_right_doors = node.open_right_doors;
                return sample;
            }

            // The end point does not accelerate away.
            if now <= node.departure_time || i == self.nodes.len() - 1 {
                return sample;
            }

            if now <= node.acceleration_end_time {
                let dt = now - node.departure_time;
                let delta = node.passing_speed * dt + 0.5 * node.accelerate * dt.powi(2);
                sample.mileage += delta;
                sample.position += sample.direction.sign() * delta;
                return sample;
            }
            sample.mileage += (node.acceleration_end_position - sample.position).abs();
            sample.position = node.acceleration_end_position;
        }

        sample
    }

    /// The rail serving the given mileage: the rail of the last
    /// waypoint already reached at that mileage, or the first
    /// waypoint's rail before any is reached.
    pub fn rail_index_at(&self, mileage: f64) -> usize {
        self.nodes
            .iter()
            .rev()
            .find(|node| node.mileage <= mileage)
            .map(|node| node.rail_index)
            .unwrap_or(self.nodes[0].rail_index)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn two_stops() -> Trajectory {
        let waypoints = [
            Waypoint::stop(0.0, 10.0, 1.0, 1.0, TravelDirection::Forward),
            Waypoint::stop(100.0, 0.0, 1.0, 1.0, TravelDirection::Forward),
        ];
        Trajectory::new(&waypoints, DoorTiming::default(), 0.0)
    }

    #[test]
    fn two_stop_plan_matches_hand_calculation() {
        let trajectory = two_stops();

        assert_approx_eq!(trajectory.nodes[0].acceleration_end_position, 50.0);
        assert_approx_eq!(trajectory.nodes[0].acceleration_end_time, 10.0);
        assert_approx_eq!(trajectory.nodes[1].deceleration_start_position, 50.0);
        assert_approx_eq!(trajectory.nodes[1].deceleration_start_time, 10.0);
        assert_approx_eq!(trajectory.nodes[1].arrival_time, 20.0);
        assert_approx_eq!(trajectory.nodes[1].mileage, 100.0);

        // The two zones touch exactly; the rates must be left alone.
        assert_approx_eq!(trajectory.nodes[0].accelerate, 1.0);
        assert_approx_eq!(trajectory.nodes[1].decelerate, -1.0);

        assert_approx_eq!(trajectory.sample(5.0).position, 12.5);
        assert_approx_eq!(trajectory.sample(10.0).position, 50.0);
        assert_approx_eq!(trajectory.sample(15.0).position, 87.5);
        assert_approx_eq!(trajectory.sample(20.0).position, 100.0);
        assert_approx_eq!(trajectory.sample(25.0).position, 100.0);
        assert_approx_eq!(trajectory.sample(20.0).mileage, 100.0);
    }

    #[test]
    fn overlapping_zones_recompute_both_rates() {
        // 20 m/s over 100 m cannot be reached at 1 m/s^2 and still brake in time.
        let waypoints = [
            Waypoint::stop(0.0, 20.0, 1.0, 1.0, TravelDirection::Forward),
            Waypoint::stop(100.0, 0.0, 1.0, 1.0, TravelDirection::Forward),
        ];
        let trajectory = Trajectory::new(&waypoints, DoorTiming::default(), 0.0);

        assert_approx_eq!(trajectory.nodes[0].accelerate, 4.0);
        assert_approx_eq!(trajectory.nodes[1].decelerate, -4.0);
        assert_approx_eq!(trajectory.nodes[0].acceleration_end_position, 50.0);
        assert_approx_eq!(trajectory.nodes[1].deceleration_start_position, 50.0);
        assert_approx_eq!(trajectory.nodes[0].acceleration_end_time, 5.0);
        assert_approx_eq!(trajectory.nodes[1].arrival_time, 10.0);
        assert_approx_eq!(trajectory.sample(10.0).position, 100.0);
    }

    #[test]
    fn validation_is_idempotent() {
        let waypoints = [
            Waypoint::stop(0.0, 20.0, 1.0, 1.0, TravelDirection::Forward),
            Waypoint::stop(100.0, 0.0, 1.0, 1.0, TravelDirection::Forward),
        ];
        let repaired = Trajectory::new(&waypoints, DoorTiming::default(), 0.0);
        let mut revalidated = repaired.clone();
        revalidated.validate(0.0);
        assert_eq!(repaired, revalidated);

        let untouched = two_stops();
        let mut revalidated = untouched.clone();
        revalidated.validate(0.0);
        assert_eq!(untouched, revalidated);
    }

    #[test]
    fn zero_rates_make_speed_changes_instantaneous() {
        let waypoints = [
            Waypoint::stop(0.0, 10.0, 0.0, 0.0, TravelDirection::Forward),
            Waypoint::stop(100.0, 0.0, 0.0, 0.0, TravelDirection::Forward),
        ];
        let trajectory = Trajectory::new(&waypoints, DoorTiming::default(), 0.0);

        assert_approx_eq!(trajectory.nodes[0].acceleration_end_position, 0.0);
        assert_approx_eq!(trajectory.nodes[0].acceleration_end_time, 0.0);
        assert_approx_eq!(trajectory.nodes[1].deceleration_start_position, 100.0);
        assert_approx_eq!(trajectory.nodes[1].arrival_time, 10.0);

        assert_approx_eq!(trajectory.sample(5.0).position, 50.0);
        assert_approx_eq!(trajectory.sample(10.0).position, 100.0);
        assert_approx_eq!(trajectory.sample(12.0).position, 100.0);
    }

    #[test]
    fn mileage_accumulates_across_a_reversal() {
        let waypoints = [
            Waypoint::stop(0.0, 10.0, 1.0, 1.0, TravelDirection::Forward),
            Waypoint::stop(100.0, 5.0, 1.0, 1.0, TravelDirection::Reverse),
            Waypoint::stop(50.0, 0.0, 1.0, 1.0, TravelDirection::Reverse),
        ];
        let trajectory = Trajectory::new(&waypoints, DoorTiming::default(), 0.0);

        assert_approx_eq!(trajectory.nodes[1].mileage, 100.0);
        assert_approx_eq!(trajectory.nodes[2].mileage, 150.0);

        // Still closing in on the far stop: facing forward.
        let sample = trajectory.sample(15.0);
        assert_approx_eq!(sample.position, 87.5);
        assert_approx_eq!(sample.mileage, 87.5);
        assert_eq!(sample.direction, TravelDirection::Forward);

        // Pulling away from the far stop: position falls, mileage grows.
        let sample = trajectory.sample(22.0);
        assert_approx_eq!(sample.position, 98.0);
        assert_approx_eq!(sample.mileage, 102.0);
        assert_eq!(sample.direction, TravelDirection::Reverse);

        let sample = trajectory.sample(32.0);
        assert_approx_eq!(sample.position, 54.5);
        assert_approx_eq!(sample.mileage, 145.5);

        let sample = trajectory.sample(40.0);
        assert_approx_eq!(sample.position, 50.0);
        assert_approx_eq!(sample.mileage, 150.0);

        // Mileage never decreases, whichever way the train is moving.
        let mut mileage = 0.0;
        for tick in 0..80 {
            let sample = trajectory.sample(0.5 * tick as f64);
            assert!(sample.mileage >= mileage);
            mileage = sample.mileage;
        }
    }

    #[test]
    fn doors_follow_the_dwell_cascade() {
        let timing = DoorTiming {
            opening: 2.0,
            closing: 3.0,
        };
        let waypoints = [
            Waypoint::stop(0.0, 10.0, 1.0, 1.0, TravelDirection::Forward)
                .with_dwell(10.0, false, true),
            Waypoint::stop(100.0, 0.0, 1.0, 1.0, TravelDirection::Forward)
                .with_dwell(4.0, true, false),
        ];
        let trajectory = Trajectory::new(&waypoints, timing, 5.0);

        assert_approx_eq!(trajectory.nodes[0].arrival_time, 5.0);
        assert_approx_eq!(trajectory.nodes[0].opening_end_time, 7.0);
        assert_approx_eq!(trajectory.nodes[0].closing_start_time, 17.0);
        assert_approx_eq!(trajectory.nodes[0].departure_time, 20.0);

        let arrival = trajectory.nodes[1].arrival_time;
        assert_approx_eq!(trajectory.nodes[1].opening_end_time, arrival + 2.0);
        assert_approx_eq!(trajectory.nodes[1].closing_start_time, arrival + 6.0);
        assert_approx_eq!(trajectory.nodes[1].departure_time, arrival + 9.0);

        // Doors are shut at the arrival instant and open just after.
        let sample = trajectory.sample(5.0);
        assert!(!sample.open_left_doors && !sample.open_right_doors);
        let sample = trajectory.sample(6.0);
        assert!(!sample.open_left_doors && sample.open_right_doors);
        let sample = trajectory.sample(17.0);
        assert!(sample.open_right_doors);
        // Shut again while they close, before the train pulls away.
        let sample = trajectory.sample(18.0);
        assert!(!sample.open_right_doors);
        assert_approx_eq!(sample.position, 0.0);

        let sample = trajectory.sample(arrival + 1.0);
        assert!(sample.open_left_doors && !sample.open_right_doors);
    }

    #[test]
    fn passing_points_are_crossed_without_a_halt() {
        let waypoints = [
            Waypoint::stop(0.0, 10.0, 4.0, 1.0, TravelDirection::Forward),
            Waypoint::pass(50.0, 5.0, 10.0, 1.0, 1.0),
            Waypoint::stop(150.0, 0.0, 1.0, 1.0, TravelDirection::Forward),
        ];
        let trajectory = Trajectory::new(&waypoints, DoorTiming::default(), 0.0);

        assert_approx_eq!(trajectory.nodes[1].deceleration_start_position, 12.5);
        assert_approx_eq!(trajectory.nodes[1].arrival_time, 7.5);
        assert_approx_eq!(trajectory.nodes[1].departure_time, 7.5);
        assert_approx_eq!(trajectory.nodes[1].acceleration_end_position, 87.5);
        assert_approx_eq!(trajectory.nodes[1].acceleration_end_time, 12.5);
        assert_approx_eq!(trajectory.nodes[2].deceleration_start_time, 13.75);
        assert_approx_eq!(trajectory.nodes[2].arrival_time, 23.75);

        // Dead on the point at its arrival time, and moving right after.
        assert_approx_eq!(trajectory.sample(7.5).position, 50.0);
        assert!(trajectory.sample(7.6).position > 50.0);
        assert_approx_eq!(trajectory.sample(10.0).position, 65.625);
        assert_approx_eq!(trajectory.sample(23.75).position, 150.0);
    }

    #[test]
    fn position_is_continuous_at_phase_boundaries() {
        let waypoints = [
            Waypoint::stop(0.0, 10.0, 4.0, 1.0, TravelDirection::Forward),
            Waypoint::pass(50.0, 5.0, 10.0, 1.0, 1.0),
            Waypoint::stop(150.0, 0.0, 1.0, 1.0, TravelDirection::Forward),
        ];
        let trajectory = Trajectory::new(&waypoints, DoorTiming::default(), 0.0);

        let mut boundaries = vec![];
        for node in &trajectory.nodes {
            boundaries.extend([
                node.deceleration_start_time,
                node.arrival_time,
                node.departure_time,
                node.acceleration_end_time,
            ]);
        }
        for boundary in boundaries {
            let before = trajectory.sample(boundary - 1e-9).position;
            let after = trajectory.sample(boundary + 1e-9).position;
            assert_approx_eq!(before, after, 1e-6);
        }
    }

    #[test]
    fn zero_distance_pairs_are_not_repaired() {
        let waypoints = [
            Waypoint::stop(0.0, 10.0, 1.0, 1.0, TravelDirection::Forward),
            Waypoint::stop(0.0, 10.0, 1.0, 1.0, TravelDirection::Forward),
        ];
        let trajectory = Trajectory::new(&waypoints, DoorTiming::default(), 0.0);

        // The zones overlap, but a zero-distance pair is a loader error
        // and its rates are left untouched.
        assert_approx_eq!(trajectory.nodes[0].accelerate, 1.0);
        assert_approx_eq!(trajectory.nodes[1].decelerate, -1.0);
        assert_approx_eq!(trajectory.sample(1000.0).position, 0.0);
    }

    #[test]
    fn rail_index_follows_mileage() {
        let waypoints = [
            Waypoint::stop(0.0, 10.0, 1.0, 1.0, TravelDirection::Forward).on_rail(0),
            Waypoint::stop(100.0, 10.0, 1.0, 1.0, TravelDirection::Forward).on_rail(1),
            Waypoint::stop(150.0, 0.0, 1.0, 1.0, TravelDirection::Forward).on_rail(2),
        ];
        let trajectory = Trajectory::new(&waypoints, DoorTiming::default(), 0.0);

        assert_eq!(trajectory.rail_index_at(-5.0), 0);
        assert_eq!(trajectory.rail_index_at(0.0), 0);
        assert_eq!(trajectory.rail_index_at(99.0), 0);
        assert_eq!(trajectory.rail_index_at(120.0), 1);
        assert_eq!(trajectory.rail_index_at(150.0), 2);
        assert_eq!(trajectory.rail_index_at(1000.0), 2);
    }

    #[test]
    fn door_timing_from_frequencies() {
        let timing = DoorTiming::from_frequencies(0.5, 0.25, 1.5);
        assert_approx_eq!(timing.opening, 2.0);
        assert_approx_eq!(timing.closing, 4.0);

        let timing = DoorTiming::from_frequencies(0.0, 0.25, 1.5);
        assert_approx_eq!(timing.opening, 1.5);
        assert_approx_eq!(timing.closing, 4.0);
    }
}

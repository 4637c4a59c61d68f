use rail_sim::{MarkerInstruction, Simulation, TrainAttributes, TravelDirection, Waypoint};

fn main() {
    let mut sim = Simulation::new();

    let attributes = TrainAttributes {
        car_count: 3,
        car_length: 20.0,
        door_open_frequency: 0.5,
        door_close_frequency: 0.5,
        leave_time: 170.0,
    };

    // An out-and-back working: away to the far terminus via a passing
    // point, then back to the middle platform.
    sim.add_train(
        &attributes,
        vec![
            Waypoint::stop(0.0, 15.0, 0.8, 1.0, TravelDirection::Forward)
                .with_dwell(10.0, true, false),
            Waypoint::pass(400.0, 12.0, 15.0, 0.8, 1.0),
            Waypoint::stop(900.0, 10.0, 0.8, 1.0, TravelDirection::Reverse)
                .with_dwell(15.0, false, true),
            Waypoint::stop(600.0, 0.0, 0.8, 1.0, TravelDirection::Reverse),
        ],
    );

    // An opposing ghost train dragged along by timed markers.
    sim.add_marker_train(
        &TrainAttributes {
            leave_time: 0.0,
            ..attributes
        },
        vec![
            MarkerInstruction {
                position: 1000.0,
                time: 0.0,
            },
            MarkerInstruction {
                position: 0.0,
                time: 120.0,
            },
        ],
    );

    for i in 0..400 {
        sim.step(0.5);
        if i % 20 == 19 {
            println!(
                "t={:6.1}s  in service: {}",
                sim.time(),
                sim.iter_trains().count()
            );
            for (id, train) in sim.iter_trains() {
                println!(
                    "  {:?}: front={:7.1}m  speed={:5.1}m/s  doors l/r {:.1}/{:.1}",
                    id,
                    train.front_position(),
                    train.speed(),
                    train.cars()[0].left_door.state,
                    train.cars()[0].right_door.state,
                );
            }
        }
    }

    println!("{} trains still in service", sim.iter_trains().count());
}

use crate::train::Train;
use crate::TrainId;
#[cfg(feature = "debug")]
use serde_json::json;
#[cfg(feature = "debug")]
use slotmap::Key;

#[cfg(feature = "debug")]
thread_local!(
    static DEBUG_FRAME: std::cell::RefCell<Vec<serde_json::Value>> = Default::default();
);

#[allow(unused)]
pub fn debug_train(id: TrainId, train: &Train) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "train",
            "id": id.data().as_ffi(),
            "front_position": train.front_position(),
            "speed": train.speed(),
            "acceleration": train.acceleration(),
            "mileage": train.mileage(),
            "doors": [train.cars()[0].left_door.state, train.cars()[0].right_door.state],
        }))
    })
}

#[cfg(feature = "debug")]
pub fn take_debug_frame() -> serde_json::Value {
    json!(DEBUG_FRAME.with(|frame| frame.take()))
}

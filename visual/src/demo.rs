/// ----- DEMO MODULE -----
/// Optional background traffic so the policy has something to do: a few
/// seeded journeys shortly after startup, then a trickle of random calls.

use std::sync::Arc;
use std::thread::{sleep, spawn};
use std::time::Duration;

use parking_lot::Mutex;
use rand::Rng;

use dispatch::{Call, Dispatcher};

pub fn init(dispatcher: Arc<Mutex<Dispatcher>>) {
    spawn(move || main(dispatcher));
}

fn main(dispatcher: Arc<Mutex<Dispatcher>>) {
    let mut rng = rand::thread_rng();
    let num_floors = dispatcher.lock().num_floors();

    sleep(Duration::from_secs(4));
    for _ in 0..3 {
        let from = rng.gen_range(0..num_floors - 1);
        let to = rng.gen_range(from + 1..num_floors);
        let mut d = dispatcher.lock();
        d.register(from, Call::HallUp).unwrap();
        d.register(to, Call::Cab).unwrap();
    }

    loop {
        sleep(Duration::from_secs(6));
        let floor = rng.gen_range(0..num_floors);
        // The top floor has no up button, the ground floor no down button.
        let call = if rng.gen_bool(0.5) && floor < num_floors - 1 {
            Call::HallUp
        } else if floor > 0 {
            Call::HallDown
        } else {
            Call::HallUp
        };
        dispatcher.lock().register(floor, call).unwrap();
        if rng.gen_bool(0.3) {
            let target = rng.gen_range(0..num_floors);
            dispatcher.lock().register(target, Call::Cab).unwrap();
        }
    }
}

//! End-to-end scenarios driving the dispatcher the way the drivers do:
//! register a few calls, tick the simulation, watch the stops.

use dispatch::{Call, Direction, DispatchError, Dispatcher, DoorState, Motion};

fn integral_dispatcher(num_floors: u8) -> Dispatcher {
    Dispatcher::new(
        num_floors,
        Motion {
            speed_floors_per_s: 1.0,
            door_open_duration_s: 3.0,
        },
    )
}

/// Ticks until the car has nothing left to do, recording each floor where
/// the doors opened.
fn record_stops(d: &mut Dispatcher, max_ticks: usize) -> Vec<u8> {
    let mut stops = Vec::new();
    let mut doors_were_open = d.door_state() == DoorState::Open;
    for _ in 0..max_ticks {
        d.advance(1.0);
        let open = d.door_state() == DoorState::Open;
        if open && !doors_were_open {
            stops.push(d.current_floor());
        }
        doors_were_open = open;
        if d.direction() == Direction::Idle && !open && !d.requests().any() {
            break;
        }
    }
    stops
}

#[test]
fn cab_target_from_ground_floor() {
    let mut d = integral_dispatcher(10);
    d.register(5, Call::Cab).unwrap();
    assert_eq!(d.direction(), Direction::Up);

    for _ in 0..5 {
        d.advance(1.0);
    }
    assert_eq!(d.position(), 5.0);
    assert_eq!(d.door_state(), DoorState::Open);
    assert!(d.status().pending_calls.is_empty());
}

#[test]
fn climbs_past_opposite_call_then_reverses() {
    let mut d = integral_dispatcher(10);
    d.register(5, Call::Cab).unwrap();
    let stops = record_stops(&mut d, 50);
    assert_eq!(stops, vec![5]);

    // At floor 5, idle. An up call above and a down call below: the car
    // must climb to 7 without stopping anywhere else, then reverse to 3.
    d.register(7, Call::HallUp).unwrap();
    d.register(3, Call::HallDown).unwrap();
    let stops = record_stops(&mut d, 50);
    assert_eq!(stops, vec![7, 3]);
    assert_eq!(d.direction(), Direction::Idle);
}

#[test]
fn every_valid_cab_target_is_eventually_served() {
    for floor in 0..10 {
        let mut d = integral_dispatcher(10);
        d.register(floor, Call::Cab).unwrap();
        let mut served = d.door_state() == DoorState::Open && d.current_floor() == floor;
        for _ in 0..50 {
            d.advance(1.0);
            if d.door_state() == DoorState::Open && d.current_floor() == floor {
                served = true;
                break;
            }
        }
        assert!(served, "cab target {} was never served", floor);
    }
}

#[test]
fn position_stays_inside_the_shaft() {
    let mut d = integral_dispatcher(10);
    d.register(9, Call::HallDown).unwrap();
    d.register(0, Call::HallUp).unwrap();
    d.register(4, Call::Cab).unwrap();
    for _ in 0..100 {
        d.advance(1.0);
        assert!(d.position() >= 0.0);
        assert!(d.position() <= 9.0);
    }
}

#[test]
fn continuous_motion_snaps_onto_served_floors() {
    // The animated variant: 0.9 floors/s sampled every 30 ms.
    let mut d = Dispatcher::new(
        10,
        Motion {
            speed_floors_per_s: 0.9,
            door_open_duration_s: 1.0,
        },
    );
    d.register(2, Call::Cab).unwrap();

    let mut ticks = 0;
    while d.door_state() != DoorState::Open {
        d.advance(0.03);
        ticks += 1;
        assert!(ticks < 200, "target was never reached");
    }
    assert_eq!(d.position(), 2.0);
    // 2 floors at 0.9 floors/s is about 74 ticks of 30 ms.
    assert!(ticks > 60);
}

#[test]
fn invalid_floors_leave_state_untouched() {
    let mut d = integral_dispatcher(10);
    assert_eq!(
        d.register(10, Call::Cab),
        Err(DispatchError::InvalidFloor {
            floor: 10,
            num_floors: 10
        })
    );
    assert_eq!(d.status().pending_calls, Vec::<u8>::new());
    assert_eq!(d.direction(), Direction::Idle);
}

/// ----- RENDER MODULE -----
/// Redraws the shaft and car state in place on every animation tick. The
/// whole frame is rebuilt as a string and written at once; the terminal is
/// in raw mode, so lines end with \r\n.

use std::io::{Stdout, Write};

use crossterm::{cursor, terminal, ExecutableCommand, Result};

use dispatch::{Dispatcher, DoorState};

pub fn frame_height(num_floors: u8) -> u16 {
    // Shaft table, state table, key help and the blank lines between them.
    num_floors as u16 + 14
}

/// Reserves the frame's screen area so the first draw has lines to move
/// back over.
pub fn prepare(stdout: &mut Stdout, num_floors: u8) -> Result<()> {
    for _ in 0..frame_height(num_floors) {
        write!(stdout, "\r\n")?;
    }
    stdout.flush()?;
    Ok(())
}

pub fn draw(stdout: &mut Stdout, dispatcher: &Dispatcher) -> Result<()> {
    stdout.execute(cursor::MoveUp(frame_height(dispatcher.num_floors())))?;
    stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;
    write!(stdout, "{}", frame(dispatcher))?;
    stdout.flush()?;
    Ok(())
}

fn frame(dispatcher: &Dispatcher) -> String {
    let num_floors = dispatcher.num_floors();
    let mut lines: Vec<String> = Vec::new();

    lines.push(String::from(
        "+-------+---------+------------+------------+------------+",
    ));
    lines.push(format!(
        "| {0:<5} | {1:<7} | {2:<10} | {3:<10} | {4:<10} |",
        "FLOOR", "SHAFT", "HALL UP", "HALL DOWN", "CAB"
    ));
    lines.push(String::from(
        "+-------+---------+------------+------------+------------+",
    ));
    for floor in (0..num_floors).rev() {
        let requests = dispatcher.requests().get_requests_at_floor(floor);
        let car = if dispatcher.current_floor() == floor {
            match dispatcher.door_state() {
                DoorState::Open => "[|   |]",
                DoorState::Closed => "[=====]",
            }
        } else {
            ""
        };
        lines.push(format!(
            "| {0:<5} | {1:<7} | {2:<10} | {3:<10} | {4:<10} |",
            floor, car, requests[0], requests[1], requests[2]
        ));
    }
    lines.push(String::from(
        "+-------+---------+------------+------------+------------+",
    ));
    lines.push(String::new());
    lines.push(String::from("+-------------------------+"));
    lines.push(String::from("| CAR                     |"));
    lines.push(String::from("+------------+------------+"));
    lines.push(format!(
        "| {0:<10} | {1:<10.2} |",
        "POSITION",
        dispatcher.position()
    ));
    lines.push(format!(
        "| {0:<10} | {1:<10} |",
        "DIRECTION",
        dispatcher.direction().as_str()
    ));
    lines.push(format!(
        "| {0:<10} | {1:<10} |",
        "DOORS",
        dispatcher.door_state().as_str()
    ));
    lines.push(String::from("+------------+------------+"));
    lines.push(String::new());
    lines.push(String::from(
        "keys: 0-9 cabin target, u+digit hall up, d+digit hall down, q quit",
    ));
    lines.join("\r\n") + "\r\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch::{Call, Motion};

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(
            10,
            Motion {
                speed_floors_per_s: 0.9,
                door_open_duration_s: 1.0,
            },
        )
    }

    #[test]
    fn frame_has_the_advertised_height() {
        let d = dispatcher();
        let frame = frame(&d);
        assert_eq!(
            frame.matches("\r\n").count(),
            frame_height(d.num_floors()) as usize
        );
    }

    #[test]
    fn frame_shows_car_and_requests() {
        let mut d = dispatcher();
        d.register(4, Call::HallUp).unwrap();
        let frame = frame(&d);
        assert!(frame.contains("[=====]"));
        assert!(frame.contains("| 4     |         | true"));
        assert!(frame.contains("| DIRECTION  | up"));
    }

    #[test]
    fn frame_shows_open_doors_marker() {
        let mut d = dispatcher();
        d.register(0, Call::Cab).unwrap();
        assert!(frame(&d).contains("[|   |]"));
    }
}

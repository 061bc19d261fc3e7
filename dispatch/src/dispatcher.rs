/// ----- DISPATCHER MODULE -----
/// Owns the car state (position, direction, doors, pending requests) and
/// advances it one discrete step per driver tick. Callers register requests
/// between ticks and read a status snapshot after each one.

use crate::call::Call;
use crate::direction::Direction;
use crate::doors::{DoorState, Doors};
use crate::error::{DispatchError, Result};
use crate::requests::Requests;
use crate::status::Status;

/// A position this close to an integer floor counts as arrived and is
/// snapped to it. Configured tick travel must stay below twice this value
/// or the car can step over a floor without detecting it.
const ARRIVAL_EPSILON: f64 = 0.02;

#[derive(Debug, Clone, Copy)]
pub struct Motion {
    pub speed_floors_per_s: f64,
    pub door_open_duration_s: f64,
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    num_floors: u8,
    motion: Motion,
    position: f64,
    direction: Direction,
    doors: Doors,
    requests: Requests,
}

impl Dispatcher {
    pub fn new(num_floors: u8, motion: Motion) -> Self {
        Dispatcher {
            num_floors,
            motion,
            position: 0.0,
            direction: Direction::Idle,
            doors: Doors::new(),
            requests: Requests::new(num_floors),
        }
    }

    /// Registers a hall call or cabin target. While idle the travel
    /// direction is decided right away; a request for the floor the car is
    /// already at just opens the doors.
    pub fn register(&mut self, floor: u8, call: Call) -> Result<()> {
        if floor >= self.num_floors {
            return Err(DispatchError::InvalidFloor {
                floor,
                num_floors: self.num_floors,
            });
        }
        self.requests.add(floor, call);
        if self.direction == Direction::Idle {
            let here = self.current_floor();
            if floor > here {
                self.direction = Direction::Up;
            } else if floor < here {
                self.direction = Direction::Down;
            } else {
                self.open_doors(floor);
            }
        }
        Ok(())
    }

    /// One simulation step of `dt` seconds. Never fails: with no pending
    /// requests the car simply stays where it is.
    pub fn advance(&mut self, dt: f64) {
        // Doors hold the car in place until the open period runs out.
        if self.doors.is_open() {
            self.doors.tick(dt);
            return;
        }

        if self.direction == Direction::Idle {
            self.choose_direction();
            if self.direction == Direction::Idle {
                // Nothing above or below; serve a request at this floor.
                let here = self.current_floor();
                if self.requests.any_at_floor(here) {
                    self.open_doors(here);
                }
                return;
            }
        }

        let delta = self.direction.sign() * self.motion.speed_floors_per_s * dt;
        self.position = (self.position + delta).clamp(0.0, (self.num_floors - 1) as f64);

        let nearest = self.position.round();
        if (self.position - nearest).abs() < ARRIVAL_EPSILON {
            self.position = nearest;
            let floor = nearest as u8;
            if self.requests.should_stop(floor, self.direction) {
                self.open_doors(floor);
            }
            // Re-evaluate either way: the served request may have been the
            // last one ahead, or the car overshot everything and must
            // reverse without stopping here.
            self.direction = self.requests.next_direction(floor, self.direction);
        }
    }

    pub(crate) fn choose_direction(&mut self) {
        let above = self.requests.nearest_above(self.position);
        let below = self.requests.nearest_below(self.position);
        self.direction = match (above, below) {
            (Some(up), Some(down)) => {
                // Ties go up.
                if up as f64 - self.position <= self.position - down as f64 {
                    Direction::Up
                } else {
                    Direction::Down
                }
            }
            (Some(_), None) => Direction::Up,
            (None, Some(_)) => Direction::Down,
            (None, None) => Direction::Idle,
        };
    }

    fn open_doors(&mut self, floor: u8) {
        self.requests.clear_floor(floor);
        self.doors.open(self.motion.door_open_duration_s);
    }

    pub fn current_floor(&self) -> u8 {
        self.position.round() as u8
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn door_state(&self) -> DoorState {
        self.doors.state()
    }

    pub fn requests(&self) -> &Requests {
        &self.requests
    }

    pub fn num_floors(&self) -> u8 {
        self.num_floors
    }

    pub fn status(&self) -> Status {
        Status {
            current_floor: self.current_floor(),
            direction: String::from(self.direction.as_str()),
            doors: String::from(self.doors.state().as_str()),
            pending_calls: self.requests.pending_floors(),
        }
    }
}

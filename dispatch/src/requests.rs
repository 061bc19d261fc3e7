/// ----- REQUESTS MODULE -----
/// Pending-request bookkeeping and the stop/reversal rules of the SCAN
/// policy. Requests are a floors x calls boolean matrix; a floor may carry
/// a hall call in each direction and a cabin target at the same time.

use crate::call::Call;
use crate::direction::Direction;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct Requests {
    requests: Vec<Vec<bool>>,
    num_floors: u8,
}

impl Requests {
    pub fn new(num_floors: u8) -> Self {
        Requests {
            num_floors,
            requests: vec![vec![false; Call::num_calls() as usize]; num_floors as usize],
        }
    }

    pub fn add(&mut self, floor: u8, call: Call) {
        self.requests[floor as usize][call as usize] = true;
    }

    /// A stop serves every pending call at that floor, in both directions.
    pub fn clear_floor(&mut self, floor: u8) {
        for call in Call::iter() {
            self.requests[floor as usize][call as usize] = false;
        }
    }

    pub fn is_set(&self, floor: u8, call: Call) -> bool {
        self.requests[floor as usize][call as usize]
    }

    pub fn any(&self) -> bool {
        self.requests.iter().any(|floor| floor.iter().any(|&set| set))
    }

    pub fn any_at_floor(&self, floor: u8) -> bool {
        self.requests[floor as usize].iter().any(|&set| set)
    }

    pub fn get_requests_at_floor(&self, floor: u8) -> Vec<bool> {
        self.requests[floor as usize].clone()
    }

    pub fn further_requests_above(&self, floor: u8) -> bool {
        (floor + 1..self.num_floors).any(|f| self.any_at_floor(f))
    }

    pub fn further_requests_below(&self, floor: u8) -> bool {
        (0..floor).any(|f| self.any_at_floor(f))
    }

    /// Nearest requested floor strictly above `position`, if any.
    pub fn nearest_above(&self, position: f64) -> Option<u8> {
        (0..self.num_floors).find(|&f| f as f64 > position && self.any_at_floor(f))
    }

    /// Nearest requested floor strictly below `position`, if any.
    pub fn nearest_below(&self, position: f64) -> Option<u8> {
        (0..self.num_floors)
            .rev()
            .find(|&f| (f as f64) < position && self.any_at_floor(f))
    }

    /// Sorted union of all floors with at least one pending call.
    pub fn pending_floors(&self) -> Vec<u8> {
        (0..self.num_floors).filter(|&f| self.any_at_floor(f)).collect()
    }

    /// The stop-here rule, given the current travel direction:
    /// - going up, stop for a cabin target or an up hall call at this floor,
    ///   and for a down hall call here when nothing is requested above (the
    ///   last stop before reversal picks it up on the way);
    /// - going down, symmetric;
    /// - idle, stop for anything pending at this floor.
    pub fn should_stop(&self, floor: u8, direction: Direction) -> bool {
        match direction {
            Direction::Up => {
                self.is_set(floor, Call::Cab)
                    || self.is_set(floor, Call::HallUp)
                    || (self.is_set(floor, Call::HallDown) && !self.further_requests_above(floor))
            }
            Direction::Down => {
                self.is_set(floor, Call::Cab)
                    || self.is_set(floor, Call::HallDown)
                    || (self.is_set(floor, Call::HallUp) && !self.further_requests_below(floor))
            }
            Direction::Idle => self.any_at_floor(floor),
        }
    }

    /// Keep travelling while something is still requested ahead; otherwise
    /// reverse if anything is pending at all, else go idle.
    pub fn next_direction(&self, floor: u8, travel: Direction) -> Direction {
        match travel {
            Direction::Up => {
                if self.further_requests_above(floor) {
                    Direction::Up
                } else if self.any() {
                    Direction::Down
                } else {
                    Direction::Idle
                }
            }
            Direction::Down => {
                if self.further_requests_below(floor) {
                    Direction::Down
                } else if self.any() {
                    Direction::Up
                } else {
                    Direction::Idle
                }
            }
            Direction::Idle => Direction::Idle,
        }
    }
}

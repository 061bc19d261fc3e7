#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Idle,
    Up,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Idle => "idle",
            Direction::Up => "up",
        }
    }

    /// Sign of travel along the shaft, in floors.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Down => -1.0,
            Direction::Idle => 0.0,
            Direction::Up => 1.0,
        }
    }

}

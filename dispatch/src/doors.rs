#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorState {
    Open,
    Closed,
}

impl DoorState {
    pub fn as_str(self) -> &'static str {
        match self {
            DoorState::Open => "open",
            DoorState::Closed => "closed",
        }
    }
}

/// Door timer. The cabin must not move while the doors are open, so the
/// countdown is driven from the same `advance` step that drives motion.
#[derive(Debug, Clone)]
pub struct Doors {
    state: DoorState,
    remaining: f64,
}

impl Doors {
    pub fn new() -> Self {
        Doors {
            state: DoorState::Closed,
            remaining: 0.0,
        }
    }

    pub fn open(&mut self, duration: f64) {
        self.state = DoorState::Open;
        self.remaining = duration;
    }

    /// Counts down the open period; closes when it runs out.
    pub fn tick(&mut self, dt: f64) {
        if self.state != DoorState::Open {
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.state = DoorState::Closed;
            self.remaining = 0.0;
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == DoorState::Open
    }

    pub fn state(&self) -> DoorState {
        self.state
    }
}

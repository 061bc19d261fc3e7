use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    #[error("invalid floor {floor}, must be in 0..{num_floors}")]
    InvalidFloor { floor: u8, num_floors: u8 },
}

pub type Result<T> = std::result::Result<T, DispatchError>;

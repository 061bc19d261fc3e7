/// Read-only snapshot handed to the drivers after each tick. Field names
/// and string values are the headless status reply, serialized as-is.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct Status {
    pub current_floor: u8,
    pub direction: String,
    pub doors: String,
    pub pending_calls: Vec<u8>,
}

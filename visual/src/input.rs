/// ----- INPUT MODULE -----
/// Blocks on crossterm key events in a dedicated thread and translates them
/// into registrations: a bare digit is a cabin target, a 'u' or 'd' prefix
/// turns the next digit into a hall call.

use std::thread::spawn;

use crossbeam_channel::{unbounded, Receiver};
use crossterm::event::{read, Event, KeyCode, KeyEventKind, KeyModifiers};

use dispatch::Call;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Register { floor: u8, call: Call },
    Quit,
}

pub fn init() -> Receiver<InputEvent> {
    let (event_tx, event_rx) = unbounded();
    spawn(move || {
        let mut pending: Option<Call> = None;
        loop {
            let event = match read() {
                Ok(event) => event,
                Err(_) => return,
            };
            let key = match event {
                Event::Key(key) => key,
                _ => continue,
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let input = match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(InputEvent::Quit)
                }
                KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
                KeyCode::Char('u') => {
                    pending = Some(Call::HallUp);
                    None
                }
                KeyCode::Char('d') => {
                    pending = Some(Call::HallDown);
                    None
                }
                KeyCode::Char(digit @ '0'..='9') => Some(InputEvent::Register {
                    floor: digit as u8 - b'0',
                    call: pending.take().unwrap_or(Call::Cab),
                }),
                _ => {
                    pending = None;
                    None
                }
            };
            if let Some(input) = input {
                if event_tx.send(input).is_err() {
                    return;
                }
            }
        }
    });
    event_rx
}

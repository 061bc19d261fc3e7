use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{select, tick};
use crossterm::{cursor, terminal, ExecutableCommand, Result};
use parking_lot::Mutex;

use dispatch::config::Config;
use dispatch::Dispatcher;

pub mod demo;
pub mod input;
pub mod render;

fn main() -> Result<()> {
    // READ CONFIGURATION
    let config = Config::get();
    let settings = config.visual.clone();

    // INITIALIZE DISPATCHER
    let dispatcher = Arc::new(Mutex::new(Dispatcher::new(
        config.settings.num_floors,
        settings.motion,
    )));

    // INITIALIZE KEYBOARD INPUT THREAD
    let input_rx = input::init();

    // OPTIONAL RANDOM TRAFFIC
    if config.demo {
        demo::init(dispatcher.clone());
    }

    // ANIMATION TICKER
    let ticker = tick(Duration::from_secs_f64(settings.tick_period_s));

    let mut stdout = stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(cursor::Hide)?;
    render::prepare(&mut stdout, config.settings.num_floors)?;

    loop {
        select! {
            recv(ticker) -> _ => {
                let mut d = dispatcher.lock();
                d.advance(settings.tick_period_s);
                render::draw(&mut stdout, &d)?;
            },
            recv(input_rx) -> msg => {
                match msg.unwrap() {
                    input::InputEvent::Register { floor, call } => {
                        // A key for a floor outside the shaft is ignored.
                        let _ = dispatcher.lock().register(floor, call);
                    },
                    input::InputEvent::Quit => break,
                }
            },
        }
    }

    stdout.execute(cursor::Show)?;
    terminal::disable_raw_mode()?;
    Ok(())
}

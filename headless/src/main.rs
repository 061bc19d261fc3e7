use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{select, tick};
use parking_lot::Mutex;

use dispatch::config::Config;
use dispatch::Dispatcher;

pub mod console;

#[derive(serde::Serialize, Debug, Clone)]
struct Banner {
    message: String,
    floors: u8,
}

#[derive(serde::Serialize, Debug, Clone)]
struct Pong {
    ok: bool,
}

#[derive(serde::Serialize, Debug, Clone)]
struct CallReply {
    message: String,
}

#[derive(serde::Serialize, Debug, Clone)]
struct ErrorReply {
    error: String,
}

fn main() {
    // READ CONFIGURATION
    let config = Config::get();
    let settings = config.headless.clone();

    // INITIALIZE DISPATCHER
    let dispatcher = Arc::new(Mutex::new(Dispatcher::new(
        config.settings.num_floors,
        settings.motion,
    )));

    // INITIALIZE CONSOLE INPUT THREAD
    let command_rx = console::init();

    // SIMULATION TICKER
    let ticker = tick(Duration::from_secs_f64(settings.tick_period_s));

    let banner = Banner {
        message: String::from("elevator dispatcher online"),
        floors: config.settings.num_floors,
    };
    println!("{}", serde_json::to_string(&banner).unwrap());

    loop {
        select! {
            recv(ticker) -> _ => {
                dispatcher.lock().advance(settings.tick_period_s);
            },
            recv(command_rx) -> msg => {
                match msg.unwrap() {
                    console::Command::Status => {
                        let status = dispatcher.lock().status();
                        println!("{}", serde_json::to_string(&status).unwrap());
                    },
                    console::Command::Ping => {
                        println!("{}", serde_json::to_string(&Pong { ok: true }).unwrap());
                    },
                    console::Command::Register { floor, call } => {
                        let result = dispatcher.lock().register(floor, call);
                        let reply = match result {
                            Ok(()) => serde_json::to_string(&CallReply {
                                message: format!("call registered at floor {}", floor),
                            }),
                            Err(err) => serde_json::to_string(&ErrorReply {
                                error: err.to_string(),
                            }),
                        };
                        println!("{}", reply.unwrap());
                    },
                    console::Command::Invalid { message } => {
                        println!("{}", serde_json::to_string(&ErrorReply { error: message }).unwrap());
                    },
                    console::Command::Quit => return,
                }
            },
        }
    }
}

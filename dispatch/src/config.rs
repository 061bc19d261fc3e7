use std::collections::HashMap;
use std::env;
use std::fs;

use crate::dispatcher::Motion;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct ConfigFile {
    pub elevator: HashMap<String, u8>,
    pub headless: HashMap<String, f64>,
    pub visual: HashMap<String, f64>,
}

#[derive(Debug, Clone)]
pub struct ElevatorSettings {
    pub num_floors: u8,
}

/// Timing for one driver: how often it ticks and how the car moves.
#[derive(Debug, Clone)]
pub struct DriverSettings {
    pub tick_period_s: f64,
    pub motion: Motion,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: ElevatorSettings,
    pub headless: DriverSettings,
    pub visual: DriverSettings,
    pub demo: bool,
}

impl Config {
    pub fn get() -> Self {
        let file_path = "config.json";
        let fallback_file_path = "_config.json";
        let config_contents = match fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(_) => {
                println!("No configuration file provided, using default settings...");
                fs::read_to_string(fallback_file_path).unwrap()
            }
        };
        let config_file: ConfigFile = serde_json::from_str(&config_contents).unwrap();
        let (num_floors, demo) = parse_env_args(config_file.elevator["numFloors"]);

        Config {
            settings: ElevatorSettings { num_floors },
            headless: driver_settings(&config_file.headless),
            visual: driver_settings(&config_file.visual),
            demo,
        }
    }
}

fn driver_settings(section: &HashMap<String, f64>) -> DriverSettings {
    DriverSettings {
        tick_period_s: section["tickPeriod"],
        motion: Motion {
            speed_floors_per_s: section["speedFloorsPerSec"],
            door_open_duration_s: section["doorOpenDuration"],
        },
    }
}

fn parse_env_args(default_num_floors: u8) -> (u8, bool) {
    let (mut num_floors, mut demo) = (default_num_floors, false);

    let args: Vec<String> = env::args().collect();
    for arg_pair in args.rchunks_exact(2) {
        match arg_pair[0].as_str() {
            "--numfloors" => {
                num_floors = match arg_pair[1].parse::<u8>() {
                    Ok(num) if num >= 2 => num,
                    _ => {
                        println!("numfloors {} is not a valid floor count, skipping...", arg_pair[1]);
                        num_floors
                    }
                };
            }
            "--demo" => {
                demo = arg_pair[1] == "true";
            }
            _ => {
                println!("illegal argument {}, skipping...", arg_pair[0]);
            }
        }
    }
    (num_floors, demo)
}

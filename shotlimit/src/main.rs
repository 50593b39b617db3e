use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
    process::ExitCode,
};

use log::LevelFilter;
use shotlimit::{load_map, ReplayServer};
use shotlimit_config::{LoadTomlConfiguration, LoggingConfig, ShotLimitConfiguration};
use shotlimit_plugin::{Plugin, ShotLimitZones};

fn init_logger(config: &LoggingConfig) {
    if config.enabled {
        let mut logger = simple_logger::SimpleLogger::new();
        logger = logger.with_timestamp_format(time::macros::format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ));

        if !config.timestamp {
            logger = logger.without_timestamps();
        }

        if config.env {
            logger = logger.env();
        }

        logger = logger.with_level(convert_logger_filter(config.level));
        logger = logger.with_colors(config.color);

        if let Err(err) = logger.init() {
            eprintln!("Couldn't initialize logger: {err}");
        }
    }
}

const fn convert_logger_filter(level: shotlimit_config::logging::LevelFilter) -> LevelFilter {
    match level {
        shotlimit_config::logging::LevelFilter::Off => LevelFilter::Off,
        shotlimit_config::logging::LevelFilter::Error => LevelFilter::Error,
        shotlimit_config::logging::LevelFilter::Warn => LevelFilter::Warn,
        shotlimit_config::logging::LevelFilter::Info => LevelFilter::Info,
        shotlimit_config::logging::LevelFilter::Debug => LevelFilter::Debug,
        shotlimit_config::logging::LevelFilter::Trace => LevelFilter::Trace,
    }
}

fn main() -> ExitCode {
    let config = match ShotLimitConfiguration::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    init_logger(&config.logging);

    let mut server = ReplayServer::new();
    let mut plugin = ShotLimitZones::new(config.notifications);
    let metadata = plugin.metadata();
    log::info!("Loading {} {}", metadata.name, metadata.version);
    if let Err(err) = plugin.on_load(&mut server) {
        log::error!("Failed to load {}: {err}", metadata.name);
        return ExitCode::FAILURE;
    }

    match load_map(Path::new(&config.map_file), &mut plugin) {
        Ok(zones) => log::info!("Loaded {zones} shot limit zones from {}", config.map_file),
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    }

    // events come from the file given as first argument, or the console
    let replayed = match std::env::args().nth(1) {
        Some(path) => match File::open(&path) {
            Ok(file) => server.replay(&mut plugin, BufReader::new(file)),
            Err(err) => {
                log::error!("Couldn't open event script {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => server.replay(&mut plugin, io::stdin().lock()),
    };

    let code = match replayed {
        Ok(events) => {
            log::info!(
                "Replayed {events} events, {} commands issued",
                server.commands().len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Failed to read events: {err}");
            ExitCode::FAILURE
        }
    };

    if let Err(err) = plugin.on_unload(&mut server) {
        log::warn!("Failed to unload {}: {err}", metadata.name);
    }
    code
}

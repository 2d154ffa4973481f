use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub fn setup_logging(config: &Configuration)
{
    let level = match config.log_level.as_str() {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => {
            panic!("Unknown log level encountered: '{}'", config.log_level.as_str());
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}

/// Converts a bandwidth display value into bytes.
///
/// Accepts a plain integer (bytes) or an integer suffixed with `Gbps` / `Mbps`
/// (case-insensitive), scaled by 1024³ and 1024² respectively.
pub fn parse_bandwidth(value: &str) -> Result<u64, CustomError>
{
    let regex_check = Regex::new(r"^(\d+)\s*(GBPS|MBPS)?$").map_err(|e| CustomError::new(&e.to_string()))?;
    let upper = value.trim().to_uppercase();
    let captures = match regex_check.captures(&upper) {
        None => {
            return Err(CustomError::new("unsupported bandwidth value, only Gbps and Mbps are supported"));
        }
        Some(captures) => captures
    };
    let number = captures[1].parse::<u64>().map_err(|_| CustomError::new("bandwidth value out of range"))?;
    let multiplier: u64 = match captures.get(2).map(|unit| unit.as_str()) {
        Some("GBPS") => 1024 * 1024 * 1024,
        Some("MBPS") => 1024 * 1024,
        _ => 1,
    };
    number.checked_mul(multiplier).ok_or_else(|| CustomError::new("bandwidth value out of range"))
}

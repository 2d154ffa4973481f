use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Write;
use log::error;
use regex::Regex;
use crate::common::common::parse_bandwidth;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::client_kind::ClientKind;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::client_config::ClientConfig;
use crate::config::structs::configuration::Configuration;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:9200";
pub const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            log_level: String::from("info"),
            listen: String::from(DEFAULT_LISTEN),
            lang: String::from("zh"),
            compatibility_mode: false,
            use_category_as_tracker: false,
            max_download_speed: None,
            max_upload_speed: None,
            rewrite_tracker: BTreeMap::new(),
            clients: vec![],
        }
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        let mut rewrite_tracker = BTreeMap::new();
        rewrite_tracker.insert(String::from("tracker.example.org"), String::from("Example"));
        Configuration {
            max_download_speed: Some(String::from("1Gbps")),
            max_upload_speed: Some(String::from("100Mbps")),
            rewrite_tracker,
            clients: vec![
                ClientConfig {
                    name: String::from("QB1"),
                    kind: ClientKind::qbittorrent,
                    url: String::from("http://127.0.0.1:8080"),
                    username: String::from("admin"),
                    password: String::from("adminadmin"),
                    timeout: Some(30),
                },
                ClientConfig {
                    name: String::from("TR1"),
                    kind: ClientKind::transmission,
                    url: String::from("http://127.0.0.1:9091"),
                    username: String::new(),
                    password: String::new(),
                    timeout: Some(30),
                }
            ],
            ..Configuration::default()
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically config file"));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::init()) {
                    Ok(data) => data,
                    Err(e) => {
                        eprintln!("{}", ConfigurationError::SerializeError(e));
                        return Err(CustomError::new("could not serialize default configuration"));
                    }
                };
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(e) = config.validate() {
            eprintln!("[VALIDATE] {e}");
            return Err(CustomError::new(&e.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::ValidationError(format!("unknown log_level '{}'", self.log_level)));
        }

        let mut names = BTreeSet::new();
        for client in &self.clients {
            if client.name.trim().is_empty() {
                return Err(ConfigurationError::ValidationError(format!("client with url '{}' has no name", client.url)));
            }
            if !names.insert(client.name.as_str()) {
                return Err(ConfigurationError::ValidationError(format!("duplicate client name '{}'", client.name)));
            }
            match url::Url::parse(&client.url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                _ => {
                    return Err(ConfigurationError::ValidationError(format!("client '{}' has invalid url '{}'", client.name, client.url)));
                }
            }
        }

        let bandwidth_check = Regex::new(r"(?i)^\d+\s*(gbps|mbps)?$").map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        for (name, value) in [("max_download_speed", &self.max_download_speed), ("max_upload_speed", &self.max_upload_speed)] {
            if let Some(value) = value {
                if !bandwidth_check.is_match(value.trim()) {
                    return Err(ConfigurationError::ValidationError(format!("{name} has invalid value '{value}'")));
                }
            }
        }
        Ok(())
    }

    pub fn listen_address(&self) -> String {
        let listen = self.listen.trim();
        if listen.is_empty() {
            return String::from(DEFAULT_LISTEN);
        }
        if let Some(port) = listen.strip_prefix(':') {
            return format!("0.0.0.0:{port}");
        }
        if !listen.contains(':') {
            return format!("0.0.0.0:{listen}");
        }
        listen.to_string()
    }

    pub fn max_download_speed_bytes(&self) -> u64 {
        Self::bandwidth_bytes("max_download_speed", &self.max_download_speed)
    }

    pub fn max_upload_speed_bytes(&self) -> u64 {
        Self::bandwidth_bytes("max_upload_speed", &self.max_upload_speed)
    }

    fn bandwidth_bytes(name: &str, value: &Option<String>) -> u64 {
        match value {
            None => 0,
            Some(value) => match parse_bandwidth(value) {
                Ok(bytes) => bytes,
                Err(e) => {
                    error!("[CONFIG] {name} '{value}' ignored: {e}");
                    0
                }
            }
        }
    }
}

pub mod run_options;

use crate::kernel::GeoPos;
use run_options::Args;
use serde::Deserialize;
use std::fs;
use tracing::warn;

pub const CONFIG_FILE: &str = "./zoneplan.toml";

#[derive(Debug, Deserialize)]
pub struct WebServer {
    pub address: String,
}

impl Default for WebServer {
    fn default() -> Self {
        Self { address: "0.0.0.0:8080".to_owned() }
    }
}

#[derive(Debug, Deserialize)]
pub struct Forecast {
    pub base_url: String,
    pub api_token: String,
    #[serde(default = "default_geo_pos")]
    pub default_location: GeoPos,
}

fn default_geo_pos() -> GeoPos {
    GeoPos { lat: 40.440_725, long: -8.682_944 }
}

impl Default for Forecast {
    fn default() -> Self {
        Self {
            base_url: "https://api.forecast.example/v1".to_owned(),
            api_token: String::new(),
            default_location: default_geo_pos(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web_server: WebServer,
    #[serde(default)]
    pub forecast: Forecast,
}

impl Default for Config {
    fn default() -> Self {
        Self { web_server: WebServer::default(), forecast: Forecast::default() }
    }
}

impl Config {
    /// Loads the config file named by `args.cfg_file`, warning and falling
    /// back to an in-memory default `Config` if it is absent or unparsable
    /// rather than panicking the process.
    pub fn load(args: Args) -> Self {
        let config_content = match fs::read_to_string(&args.cfg_file) {
            Ok(content) => content,
            Err(e) => {
                warn!("could not read config file {}: {e}; proceeding with defaults", args.cfg_file.display());
                return Config::default();
            }
        };

        match toml::from_str(&config_content) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("could not parse config file {}: {e}; proceeding with defaults", args.cfg_file.display());
                Config::default()
            }
        }
    }

    // test helper
    pub fn load_from_str(config_str: &str) -> Self {
        toml::from_str(config_str).expect("unable to parse config")
    }
}

//! Configuration management for slotmint
//!
//! This crate provides functionality for managing the slotmint configuration,
//! including loading, saving, updating, and deleting configuration settings.

/// Error types for the configuration module
pub mod error;

use crate::error::Error;
use clap::Parser;
use serde::{Deserialize, Serialize};
#[allow(deprecated)]
use std::env::home_dir;
use std::{
    fs::File,
    io::{Read, Write},
};
use tracing::{debug, error, info};

/// Command line arguments for the configuration command
#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Display and edit the current configuration",
    override_usage = "slotmint config [OPTIONS]"
)]
pub struct ConfigArgs {
    /// The target key to update.
    #[clap(required = false, default_value = "")]
    key: String,

    /// The value to set the key to.
    #[clap(required = false, default_value = "")]
    value: String,
}

/// The [`Configuration`] struct represents the configuration of the CLI. All slotmint
/// operations will attempt to read from this configuration when possible.
#[derive(Deserialize, Serialize, Debug)]
pub struct Configuration {
    /// The URL for the Ethereum RPC endpoint
    pub rpc_url: String,

    /// The URL for the local development node (anvil or hardhat) that
    /// privileged operations default to
    pub local_rpc_url: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            rpc_url: "".to_string(),
            local_rpc_url: "http://localhost:8545".to_string(),
        }
    }
}

#[allow(deprecated)]
impl Configuration {
    /// Returns the current configuration.
    pub fn load() -> Result<Self, Error> {
        let mut home = home_dir().ok_or_else(|| {
            Error::Generic(
                "failed to get home directory. does your os support `std::env::home_dir()`?"
                    .to_string(),
            )
        })?;
        home.push(".slotmint");
        home.push("config.toml");

        // if the config file doesn't exist, create it
        if !home.exists() {
            let config = Configuration::default();
            config.save()?;
        }

        // read the config file
        let contents = read_file(
            home.to_str()
                .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))?,
        )
        .map_err(|e| Error::Generic(format!("failed to read config file: {e}")))?;

        // parse the config file
        let mut config: Configuration = toml::from_str(&contents)
            .map_err(|e| Error::ParseError(format!("failed to parse config file: {e}")))?;

        // load mesc config if enabled
        if !mesc::is_mesc_enabled() {
            return Ok(config);
        }

        if let Some(endpoint) = mesc::get_default_endpoint(Some("slotmint"))
            .map_err(|e| Error::Generic(format!("MESC error: {e}")))?
        {
            debug!("overriding rpc_url with mesc endpoint");
            config.rpc_url = endpoint.url;
        }

        Ok(config)
    }

    /// Saves the current configuration to disk.
    pub fn save(&self) -> Result<(), Error> {
        let mut home = home_dir().ok_or_else(|| {
            Error::Generic(
                "failed to get home directory. does your os support `std::env::home_dir()`?"
                    .to_string(),
            )
        })?;
        home.push(".slotmint");
        home.push("config.toml");

        write_file(
            home.to_str()
                .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))?,
            &toml::to_string(&self)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?,
        )
        .map_err(|e| Error::Generic(format!("failed to write config file: {e}")))?;

        Ok(())
    }

    /// Deletes the configuration file at `$HOME/.slotmint/config.toml`.
    pub fn delete() -> Result<(), Error> {
        let mut home = home_dir().ok_or_else(|| {
            Error::Generic(
                "failed to get home directory. does your os support `std::env::home_dir()`?"
                    .to_string(),
            )
        })?;
        home.push(".slotmint");
        home.push("config.toml");

        if home.exists() {
            std::fs::remove_file(
                home.to_str().ok_or_else(|| {
                    Error::Generic("failed to convert path to string".to_string())
                })?,
            )?;
        }

        Ok(())
    }

    /// Update a single key/value pair in the configuration.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), Error> {
        // update the key in the struct and ensure it's the correct type
        match key {
            "rpc_url" => {
                self.rpc_url = value.to_string();
            }
            "local_rpc_url" => {
                self.local_rpc_url = value.to_string();
            }
            _ => {
                return Err(Error::Generic(format!(
                    "invalid key: \'{key}\' is not a valid configuration key."
                )))
            }
        }

        // write the updated config to disk
        self.save()?;

        Ok(())
    }
}

/// The `config` command is used to display and edit the current configuration.
pub fn config(args: ConfigArgs) -> Result<(), Error> {
    if !args.key.is_empty() {
        if !args.value.is_empty() {
            // read the config file and update the key/value pair
            let mut config = Configuration::load()?;
            config.update(&args.key, &args.value)?;
            info!("updated configuration! Set \'{}\' = \'{}\' .", &args.key, &args.value);
        } else {
            // key is set, but no value is set
            error!("found key but no value to set. Please specify a value to set, use `slotmint config --help` for more information.");
        }
    } else {
        // no key is set, print the config file
        println!("{:#?}", Configuration::load()?);
        info!("use `slotmint config <KEY> <VALUE>` to set a key/value pair.");
    }

    Ok(())
}

/// Parse user input --rpc-url into a full url
pub fn parse_url_arg(url: &str) -> Result<String, String> {
    if mesc::is_mesc_enabled() {
        if let Ok(Some(endpoint)) = mesc::get_endpoint_by_query(url, Some("slotmint")) {
            return Ok(endpoint.url);
        }
    }
    Ok(url.to_string())
}

/// Write contents to a file, creating the parent directory if needed
fn write_file(path_str: &str, contents: &str) -> Result<(), std::io::Error> {
    let path = std::path::Path::new(path_str);
    if let Some(prefix) = path.parent() {
        std::fs::create_dir_all(prefix)?;
    }
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

/// Read the contents of a file as a string
fn read_file(path: &str) -> Result<String, std::io::Error> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

#[allow(deprecated)]
#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Test default configuration
    #[test]
    #[serial]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.rpc_url, "");
        assert_eq!(config.local_rpc_url, "http://localhost:8545");
    }

    // Test loading configuration from a file
    #[test]
    #[serial]
    fn test_load_configuration() {
        // delete config file if it exists
        Configuration::delete().expect("failed to delete config file");
        let config = Configuration::load().expect("failed to load config file");

        assert_eq!(config.rpc_url, "");
        assert_eq!(config.local_rpc_url, "http://localhost:8545");
    }

    // Test saving configuration to a file
    #[test]
    #[serial]
    fn test_save_configuration() {
        // delete config file if it exists
        Configuration::delete().expect("failed to delete config file");
        let mut config = Configuration::default();

        // update rpc_url
        config.update("rpc_url", "http://localhost:8545").expect("failed to update rpc_url");

        // save the config file
        config.save().expect("failed to save config file");

        // load the config file
        let loaded_config = Configuration::load().expect("failed to load config file");

        // ensure the config file was saved correctly
        assert_eq!(loaded_config.rpc_url, "http://localhost:8545");
        assert_eq!(loaded_config.local_rpc_url, "http://localhost:8545");
    }

    // Test deleting configuration file
    #[test]
    #[serial]
    fn test_delete_configuration() {
        // delete config file if it exists
        Configuration::delete().expect("failed to delete config file");
        let mut config = Configuration::load().expect("failed to load config file");

        // save some values to the config file
        config.update("rpc_url", "http://localhost:8545").expect("failed to update rpc_url");

        // delete config file if it exists
        Configuration::delete().expect("failed to delete config file");
        let config = Configuration::load().expect("failed to load config file");

        assert_eq!(config.rpc_url, "");
        assert_eq!(config.local_rpc_url, "http://localhost:8545");
    }

    // Test updating with an invalid key
    #[test]
    #[serial]
    fn test_update_invalid_key() {
        let mut config = Configuration::default();
        assert!(config.update("etherscan_api_key", "value").is_err());
    }
}

//! A simple cache system for slotmint
//! Stores objects in ~/.slotmint/cache as bincode serialized files
//! Objects are stored with an expiry time, and are deleted if they are expired
//!
//! Discovered balance-slot records are persisted here under `slot.{contract}`
//! keys so that repeat mints against the same token skip the probe trace.

use clap::Parser;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
#[allow(deprecated)]
use std::env::home_dir;

use error::Error;
use util::*;

pub mod error;
pub(crate) mod util;

/// Clap argument parser for the cache subcommand
#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Manage slotmint's cached objects",
    override_usage = "slotmint cache <SUBCOMMAND>"
)]
pub struct CacheArgs {
    /// Cache subcommand
    #[clap(subcommand)]
    pub sub: Subcommands,
}

/// A simple clap subcommand with no arguments
#[derive(Debug, Clone, Parser)]
pub struct NoArguments {}

/// Clap subcommand parser for cache subcommands
#[derive(Debug, Clone, Parser)]
#[clap(about = "Manage slotmint's cached objects")]
#[allow(clippy::large_enum_variant)]
pub enum Subcommands {
    /// Clear the cache, removing all objects
    #[clap(name = "clean", about = "Removes all cached objects in ~/.slotmint/cache")]
    Clean(NoArguments),

    /// List all cached objects
    #[clap(name = "ls", about = "Lists all cached objects in ~/.slotmint/cache")]
    Ls(NoArguments),

    /// Print the size of the cache in ~/.slotmint/cache
    #[clap(name = "size", about = "Prints the size of the cache in ~/.slotmint/cache")]
    Size(NoArguments),
}

/// A simple cache object that stores a value and an expiry time \
/// The expiry time is a unix timestamp
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Cache<T> {
    /// The value stored in the cache
    pub value: T,
    /// The expiry time of the cache object
    pub expiry: u64,
}

/// Clear the cache, removing all objects
///
/// ```
/// use slotmint_cache::{clear_cache, store_cache, keys};
///
/// /// add a value to the cache
/// store_cache("clear_cache_key", "value", None);
///
/// /// assert that the cache contains the key
/// assert!(keys("*").expect("!").contains(&"clear_cache_key".to_string()));
///
/// /// clear the cache
/// clear_cache();
///
/// /// assert that the cache no longer contains the key
/// assert!(!keys("*").expect("!").contains(&"clear_cache_key".to_string()));
/// ```
#[allow(deprecated)]
pub fn clear_cache() -> Result<(), Error> {
    let home = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;
    let cache_dir = home.join(".slotmint").join("cache");

    for entry in cache_dir
        .read_dir()
        .map_err(|e| Error::Generic(format!("failed to read cache directory: {e:?}")))?
    {
        let entry =
            entry.map_err(|e| Error::Generic(format!("failed to read cache entry: {e:?}")))?;
        delete_path(
            entry
                .path()
                .to_str()
                .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))?,
        );
    }

    Ok(())
}

/// Check if a cached object exists
///
/// ```
/// use slotmint_cache::{store_cache, exists};
///
/// /// add a value to the cache
/// store_cache("exists_key", "value", None);
///
/// /// assert that the cache contains the key
/// assert!(exists("exists_key").expect("!"));
///
/// /// assert that the cache does not contain a non-existent key
/// assert!(!exists("non_existent_key").expect("!"));
/// ```
#[allow(deprecated)]
pub fn exists(key: &str) -> Result<bool, Error> {
    let home = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;
    let cache_dir = home.join(".slotmint").join("cache");
    let cache_file = cache_dir.join(format!("{key}.bin"));

    Ok(cache_file.exists())
}

/// List all cached objects
///
/// ```
/// use slotmint_cache::{store_cache, keys};
///
/// /// add a value to the cache
/// store_cache("keys_key", "value", None);
///
/// /// assert that the cache contains the key
/// assert!(keys("*").expect("!").contains(&"keys_key".to_string()));
///
/// /// assert that the cache does not contain a non-existent key
/// assert!(!keys("*").expect("!").contains(&"non_existent_key".to_string()));
///
/// /// assert that the cache contains the key
/// assert!(keys("keys_*").expect("!").contains(&"keys_key".to_string()));
/// ```
#[allow(deprecated)]
pub fn keys(pattern: &str) -> Result<Vec<String>, Error> {
    let home = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;
    let cache_dir = home.join(".slotmint").join("cache");
    let mut keys = Vec::new();

    // remove wildcard
    let pattern = pattern.replace('*', "");

    for entry in cache_dir
        .read_dir()
        .map_err(|e| Error::Generic(format!("failed to read cache directory: {e:?}")))?
    {
        let entry =
            entry.map_err(|e| Error::Generic(format!("failed to read cache entry: {e:?}")))?;
        let key = entry
            .path()
            .file_name()
            .ok_or_else(|| Error::Generic("failed to get file name".to_string()))?
            .to_str()
            .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))?
            .to_string();
        if pattern.is_empty() || key.contains(&pattern) {
            keys.push(key.replace(".bin", ""));
        }
    }

    // sort keys alphabetically
    keys.sort();

    Ok(keys)
}

/// Delete a cached object
/// ```
/// use slotmint_cache::{store_cache, delete_cache, keys};
///
/// /// add a value to the cache
/// store_cache("delete_cache_key", "value", None);
///
/// /// assert that the cache contains the key
/// assert!(keys("*").expect("!").contains(&"delete_cache_key".to_string()));
///
/// /// delete the cached object
/// delete_cache("delete_cache_key");
///
/// /// assert that the cache does not contain the key
/// assert!(!keys("*").expect("!").contains(&"delete_cache_key".to_string()));
/// ```
#[allow(deprecated)]
pub fn delete_cache(key: &str) -> Result<(), Error> {
    let home = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;
    let cache_dir = home.join(".slotmint").join("cache");
    let cache_file = cache_dir.join(format!("{key}.bin"));

    if cache_file.exists() {
        std::fs::remove_file(cache_file)
            .map_err(|e| Error::Generic(format!("failed to delete cache file: {e:?}")))?;
    }

    Ok(())
}

/// Read a cached object
///
/// ```
/// use slotmint_cache::{store_cache, read_cache};
///
/// /// add a value to the cache
/// store_cache("read_cache_key", "value", None);
///
/// /// read the cached object
/// assert_eq!(read_cache::<String>("read_cache_key").expect("!").expect("!"), "value");
/// ```
#[allow(deprecated)]
pub fn read_cache<T>(key: &str) -> Result<Option<T>, Error>
where
    T: 'static + DeserializeOwned, {
    let home = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;
    let cache_dir = home.join(".slotmint").join("cache");
    let cache_file = cache_dir.join(format!("{key}.bin"));

    let binary_string = match read_file(
        cache_file
            .to_str()
            .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))?,
    ) {
        Ok(s) => s,
        Err(_) => return Ok(None),
    };

    let binary_vec = decode_hex(&binary_string)
        .map_err(|e| Error::Generic(format!("failed to decode hex: {e:?}")))?;

    let cache: Cache<T> = bincode::deserialize::<Cache<T>>(&binary_vec)
        .map_err(|e| Error::Generic(format!("failed to deserialize cache object: {e:?}")))?;

    // check if the cache has expired, if so, delete it and return None
    if cache.expiry <
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|e| Error::Generic(format!("failed to get current time: {e:?}")))?
            .as_secs()
    {
        delete_cache(key)?;
        return Ok(None);
    }

    Ok(Some(cache.value))
}

/// Store a value in the cache, with an optional expiry time \
/// If no expiry time is specified, the object will expire in 90 days
///
/// ```
/// use slotmint_cache::{store_cache, read_cache};
///
/// /// add a value to the cache with no expiry time (90 days)
/// store_cache("store_cache_key", "value", None);
///
/// /// add a value to the cache with an expiry time of 1 day
/// store_cache("store_cache_key2", "value", Some(60 * 60 * 24));
/// ```
#[allow(deprecated)]
pub fn store_cache<T>(key: &str, value: T, expiry: Option<u64>) -> Result<(), Error>
where
    T: Serialize, {
    let home = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;
    let cache_dir = home.join(".slotmint").join("cache");
    let cache_file = cache_dir.join(format!("{key}.bin"));

    // expire in 90 days
    let expiry = expiry.unwrap_or(
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|e| Error::Generic(format!("failed to get current time: {e:?}")))?
            .as_secs() +
            60 * 60 * 24 * 90,
    );

    let cache = Cache { value, expiry };
    let encoded: Vec<u8> = bincode::serialize(&cache)
        .map_err(|e| Error::Generic(format!("failed to serialize cache object: {e:?}")))?;
    let binary_string = encode_hex(encoded);
    write_file(
        cache_file
            .to_str()
            .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))?,
        &binary_string,
    )?;

    Ok(())
}

/// Takes in an &str and an async function that returns a Result<T, E> where T is ser/de
/// and E is an error type. \
/// If the key exists in the cache, it will return the value, otherwise it will call the function
/// and store the result in the cache, returning the value.
pub async fn with_cache<T, F, Fut>(key: &str, func: F) -> eyre::Result<T>
where
    T: 'static + Serialize + DeserializeOwned + Send + Sync,
    F: FnOnce() -> Fut + Send,
    Fut: std::future::Future<Output = Result<T, eyre::Report>> + Send, {
    // Try to read from cache
    match read_cache::<T>(key) {
        Ok(Some(cached_value)) => {
            tracing::debug!("cache hit for key: '{}'", key);
            Ok(cached_value)
        }
        Ok(None) | Err(_) => {
            tracing::debug!("cache miss for key: '{}'", key);

            // If cache read fails or returns None, execute the function
            let value = func().await?;

            // Store the result in the cache
            store_cache(key, &value, None)?;

            Ok(value)
        }
    }
}

/// Cache subcommand handler
#[allow(deprecated)]
pub fn cache(args: CacheArgs) -> Result<(), Error> {
    match args.sub {
        Subcommands::Clean(_) => {
            clear_cache()?;
            println!("Cache cleared.")
        }
        Subcommands::Ls(_) => {
            let keys = keys("*")?;
            println!("Displaying {} cached objects:", keys.len());

            for (i, key) in keys.iter().enumerate() {
                println!("{i:>5} : {key}");
            }
        }
        Subcommands::Size(_) => {
            let home = home_dir().ok_or_else(|| {
                Error::Generic(
                    "failed to get home directory. does your os support `std::env::home_dir()`?"
                        .to_string(),
                )
            })?;
            let cache_dir = home.join(".slotmint").join("cache");
            let mut size = 0;

            for entry in cache_dir
                .read_dir()
                .map_err(|e| Error::Generic(format!("failed to read cache directory: {e:?}")))?
            {
                let entry = entry
                    .map_err(|e| Error::Generic(format!("failed to read cache entry: {e:?}")))?;
                let path = entry.path();
                let metadata = std::fs::metadata(path)
                    .map_err(|e| Error::Generic(format!("failed to get metadata: {e:?}")))?;
                size += metadata.len();
            }

            println!("Cached objects: {}", keys("*")?.len());
            println!("Cache size: {}", prettify_bytes(size));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_read_round_trip() {
        store_cache("round_trip_key", 42u64, None).expect("store failed");
        let value = read_cache::<u64>("round_trip_key").expect("read failed");
        assert_eq!(value, Some(42));
        delete_cache("round_trip_key").expect("delete failed");
    }

    #[test]
    fn test_expired_object_is_dropped() {
        store_cache("expired_key", "stale".to_string(), Some(0)).expect("store failed");
        let value = read_cache::<String>("expired_key").expect("read failed");
        assert_eq!(value, None);
    }

    #[test]
    fn test_read_missing_key_is_none() {
        let value = read_cache::<String>("missing_key_xyz").expect("read failed");
        assert_eq!(value, None);
    }
}

//! # Store Configuration
//!
//! Configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CORNER_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no lock is needed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::sales::CheckoutPolicy;
use crate::store::FileStore;

/// Catalog file name used when nothing else is configured.
///
/// Relative to the working directory, matching how a shop launches the
/// application from its own data folder.
pub const DEFAULT_CATALOG_FILE: &str = "products.txt";

/// Environment variable that overrides the catalog path.
pub const CATALOG_PATH_ENV: &str = "CORNER_CATALOG_PATH";

/// Environment variable that overrides the checkout policy
/// (`all-or-nothing` or `best-effort`).
pub const CHECKOUT_POLICY_ENV: &str = "CORNER_CHECKOUT_POLICY";

/// Store configuration.
///
/// ## Fields
/// Defaults suit a single-shop development setup; deployments override via
/// environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Where the catalog file lives.
    pub catalog_path: PathBuf,

    /// How checkout treats lines that cannot be satisfied.
    pub checkout_policy: CheckoutPolicy,
}

impl Default for StoreConfig {
    /// Returns the development defaults: `products.txt` in the working
    /// directory and all-or-nothing checkout.
    fn default() -> Self {
        StoreConfig {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_FILE),
            checkout_policy: CheckoutPolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Creates a config pointing at an explicit catalog path.
    pub fn new(catalog_path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            catalog_path: catalog_path.into(),
            ..StoreConfig::default()
        }
    }

    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CORNER_CATALOG_PATH`: Override the catalog file location
    /// - `CORNER_CHECKOUT_POLICY`: `all-or-nothing` (default) or `best-effort`
    ///
    /// Unrecognized policy values are ignored and the default kept.
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(path) = std::env::var(CATALOG_PATH_ENV) {
            config.catalog_path = PathBuf::from(path);
        }

        if let Ok(policy) = std::env::var(CHECKOUT_POLICY_ENV) {
            if let Ok(policy) = policy.parse::<CheckoutPolicy>() {
                config.checkout_policy = policy;
            }
        }

        config
    }

    /// Opens a [`FileStore`] on the configured catalog path.
    pub fn file_store(&self) -> FileStore {
        FileStore::new(&self.catalog_path)
    }
}

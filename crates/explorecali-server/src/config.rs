//! Server configuration
//!
//! Values come from the Shuttle secret store (`Secrets.toml`). Missing or
//! invalid entries fall back to defaults with a warning.

use explorecali::PageDefaults;

pub const PAGE_DEFAULT_SIZE_KEY: &str = "PAGE_DEFAULT_SIZE";
pub const PAGE_MAX_SIZE_KEY: &str = "PAGE_MAX_SIZE";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerConfig {
    pub page: PageDefaults,
}

impl ServerConfig {
    /// Build the config from a key lookup, such as `SecretStore::get`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PageDefaults::default();

        let max_size = read_positive(&lookup, PAGE_MAX_SIZE_KEY).unwrap_or(defaults.max_size);
        let mut size = read_positive(&lookup, PAGE_DEFAULT_SIZE_KEY).unwrap_or(defaults.size);

        if size > max_size {
            tracing::warn!(
                "⚠️  {} ({}) exceeds {} ({}), using {}",
                PAGE_DEFAULT_SIZE_KEY,
                size,
                PAGE_MAX_SIZE_KEY,
                max_size,
                max_size
            );
            size = max_size;
        }

        Self {
            page: PageDefaults { size, max_size },
        }
    }
}

fn read_positive<F>(lookup: &F, key: &str) -> Option<u32>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            tracing::warn!("⚠️  Invalid {} value {:?} - using default", key, raw);
            None
        }
    }
}

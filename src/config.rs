//! Configuration constants and profile loading for postline
//!
//! Profiles live in an INI file, one section per profile:
//!
//! ```ini
//! [default]
//! base_url = http://localhost:3000
//! ```

use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;

/// Default profile file path for postline
pub const DEFAULT_PROFILE_PATH: &str = "~/.postline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "POSTLINE_PROFILE_PATH";

/// Base URL of the local development store
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

const BASE_URL_KEY: &str = "base_url";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Expand `~` and environment variables in a configured path
pub fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .map(|expanded| expanded.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Connection settings for one post store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogProfile {
    name: String,
    base_url: String,
}

impl BlogProfile {
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Profile used when nothing is configured
    pub fn blank(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_BASE_URL)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn with_base_url(self, base_url: &str) -> Self {
        Self::new(self.name, base_url)
    }
}

/// Load a profile from the INI file at `profile_path`.
///
/// A missing file, section or `base_url` key yields [`BlogProfile::blank`].
/// A file that exists but does not parse is an error.
pub fn load_profile(profile_name: &str, profile_path: &str) -> Result<BlogProfile> {
    let path = expand_path(profile_path);
    tracing::debug!("Loading profile '{}' from '{}'", profile_name, path);

    if !Path::new(&path).exists() {
        tracing::debug!("Profile file '{}' not found, using blank profile", path);
        return Ok(BlogProfile::blank(profile_name));
    }

    let ini = Ini::load_from_file(&path)
        .with_context(|| format!("Failed to read profile file '{path}'"))?;

    let profile = match ini
        .section(Some(profile_name))
        .and_then(|section| section.get(BASE_URL_KEY))
    {
        Some(base_url) => BlogProfile::new(profile_name, base_url.trim()),
        None => {
            tracing::debug!("Profile '{}' not found, using blank profile", profile_name);
            BlogProfile::blank(profile_name)
        }
    };

    Ok(profile)
}

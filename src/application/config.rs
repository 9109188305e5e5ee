use crate::application::Theme;
use crate::domain::{DEFAULT_BASE_PATH, DEFAULT_TIME_ZONE, PeriodCalendar};
use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use log::{debug, info};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_PAGE_SIZE: usize = 11;
pub const DEFAULT_THEME: &str = "dark";

pub struct Config {
    pub time_zone: Tz,
    pub base_path: String,
    pub page_size: usize,
    pub theme: String,
    pub config_file: Option<PathBuf>,
}

/// Optional on-disk overrides, all keys optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    time_zone: Option<String>,
    base_path: Option<String>,
    page_size: Option<usize>,
    theme: Option<String>,
}

impl Config {
    /// Defaults, then the JSON config file, then `LEADERBOARD_*` variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_file = lookup("LEADERBOARD_CONFIG")
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("leaderboards").join("config.json")));

        let file = match &config_file {
            Some(path) if path.exists() => load_file(path)?,
            _ => FileConfig::default(),
        };

        let time_zone = lookup("LEADERBOARD_TZ")
            .or(file.time_zone)
            .map(|name| parse_time_zone(&name))
            .transpose()?
            .unwrap_or(DEFAULT_TIME_ZONE);

        let base_path = lookup("LEADERBOARD_BASE_PATH")
            .or(file.base_path)
            .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());

        let page_size = match lookup("LEADERBOARD_PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid LEADERBOARD_PAGE_SIZE value: {}", raw))?,
            None => file.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        };
        if page_size == 0 {
            return Err(anyhow!("Page size must be at least 1"));
        }

        let theme = lookup("LEADERBOARD_THEME")
            .or(file.theme)
            .map(|name| parse_theme(&name))
            .transpose()?
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        info!("Using time zone {} and base path {}", time_zone, base_path);

        Ok(Self {
            time_zone,
            base_path,
            page_size,
            theme,
            config_file,
        })
    }

    pub fn calendar(&self) -> PeriodCalendar {
        PeriodCalendar::new(self.time_zone, self.base_path.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE,
            base_path: DEFAULT_BASE_PATH.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            theme: DEFAULT_THEME.to_string(),
            config_file: None,
        }
    }
}

fn load_file(path: &Path) -> Result<FileConfig> {
    debug!("Reading config file {}", path.display());
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn parse_theme(name: &str) -> Result<String> {
    let name = name.trim().to_lowercase();
    let available = Theme::available_themes();
    if available.contains(&name.as_str()) {
        Ok(name)
    } else {
        Err(anyhow!(
            "Unknown theme '{}', expected one of: {}",
            name,
            available.join(", ")
        ))
    }
}

fn parse_time_zone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| anyhow!("Unknown time zone '{}': {}", name, e))
}

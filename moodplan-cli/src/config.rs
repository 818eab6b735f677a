use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::ensure_moodplan_home;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageSection,
    pub profile: ProfileSection,
    pub quotes: QuotesSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSection {
    /// Relative paths resolve against the moodplan home directory.
    pub activities_file: PathBuf,
    pub mood_log_file: PathBuf,
    /// Where `activity_<id>.ics` files land; relative to the working directory.
    pub export_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSection {
    /// IANA timezone used to decide what "today" is.
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotesSection {
    pub enabled: bool,
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            activities_file: PathBuf::from("activities.txt"),
            mood_log_file: PathBuf::from("moods.json"),
            export_dir: PathBuf::from("."),
        }
    }
}

impl Default for ProfileSection {
    fn default() -> Self {
        Self {
            timezone: "America/Chicago".to_string(),
        }
    }
}

impl Default for QuotesSection {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "https://zenquotes.io/api/random".to_string(),
            timeout_secs: 5,
        }
    }
}

impl Config {
    pub fn activities_path(&self, home: &Path) -> PathBuf {
        home.join(&self.storage.activities_file)
    }

    pub fn mood_log_path(&self, home: &Path) -> PathBuf {
        home.join(&self.storage.mood_log_file)
    }

    pub fn timezone(&self) -> Result<Tz> {
        let tz = &self.profile.timezone;
        tz.parse()
            .map_err(|_| anyhow::anyhow!("invalid timezone in config: {tz}"))
    }

    /// Current calendar date in the configured timezone.
    pub fn today(&self) -> Result<NaiveDate> {
        Ok(Utc::now().with_timezone(&self.timezone()?).date_naive())
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_moodplan_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).context("parse config.toml")
}

pub fn save_config(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert!(cfg.quotes.enabled);
        assert_eq!(cfg.quotes.timeout_secs, 5);
        assert_eq!(cfg.storage.activities_file, PathBuf::from("activities.txt"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(
            &p,
            "[quotes]\nenabled = false\n\n[profile]\ntimezone = \"Europe/Berlin\"\n",
        )
        .unwrap();

        let cfg = load_config_from(&p).unwrap();
        assert!(!cfg.quotes.enabled);
        assert_eq!(cfg.quotes.url, "https://zenquotes.io/api/random");
        assert_eq!(cfg.timezone().unwrap(), chrono_tz::Europe::Berlin);
        assert_eq!(cfg.storage.mood_log_file, PathBuf::from("moods.json"));
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.storage.export_dir = PathBuf::from("exports");
        save_config(&cfg, &p).unwrap();

        let back = load_config_from(&p).unwrap();
        assert_eq!(back.storage.export_dir, PathBuf::from("exports"));
    }

    #[test]
    fn storage_paths_resolve_against_home() {
        let cfg = Config::default();
        let home = Path::new("/home/u/.moodplan");
        assert_eq!(cfg.activities_path(home), home.join("activities.txt"));

        let mut abs = Config::default();
        abs.storage.mood_log_file = PathBuf::from("/var/moods.json");
        assert_eq!(abs.mood_log_path(home), PathBuf::from("/var/moods.json"));
    }

    #[test]
    fn bad_timezone_is_an_error() {
        let mut cfg = Config::default();
        cfg.profile.timezone = "Mars/Olympus".to_string();
        assert!(cfg.today().is_err());
    }
}

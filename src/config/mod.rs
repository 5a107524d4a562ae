//! YAML configuration file handling.
//! Lives in a per-platform config directory next to the SQLite database.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite database file.
    pub database: String,
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Subject all HTTP requests are recorded under.
    #[serde(default = "default_subject")]
    pub subject: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5002
}
fn default_subject() -> String {
    "default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            host: default_host(),
            port: default_port(),
            subject: default_subject(),
        }
    }
}

impl Config {
    /// Standard configuration directory for the current platform:
    /// `%APPDATA%\clocklog` on Windows, `~/.clocklog` elsewhere.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("clocklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".clocklog")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("clocklog.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("clocklog.sqlite")
    }

    /// Load the configuration, falling back to defaults when no config
    /// file exists yet. A present-but-broken file is a fatal error.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Config::default();
        }

        let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
        serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
    }

    /// Create the config directory, the config file (unless `is_test`),
    /// and an empty database file at `custom_name` or the default path.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_name {
            Some(name) if Path::new(&name).is_absolute() => PathBuf::from(name),
            Some(name) => dir.join(name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize config: {e}")))?;
            fs::write(Self::config_file(), yaml)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }
        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::ui::messages;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_file: String,
    #[serde(default)]
    pub seed_file: Option<String>,
    #[serde(default = "default_show_images")]
    pub show_images: bool,
}

fn default_show_images() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        let data_path = Self::data_file();
        Self {
            data_file: data_path.to_string_lossy().to_string(),
            seed_file: None,
            show_images: default_show_images(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("trailmark")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".trailmark")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("trailmark.conf")
    }

    /// Return the full path of the persisted location data file
    pub fn data_file() -> PathBuf {
        Self::config_dir().join("locationData.json")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable or malformed config file also falls back to defaults,
    /// with a warning, so a broken config never blocks the application.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                    messages::warning(format!(
                        "Malformed configuration file {}: {} (using defaults)",
                        path.display(),
                        e
                    ));
                    Config::default()
                }),
                Err(e) => {
                    messages::warning(format!(
                        "Cannot read configuration file {}: {} (using defaults)",
                        path.display(),
                        e
                    ));
                    Config::default()
                }
            }
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration directory and file.
    ///
    /// The persisted data file is NOT created here: the store must see it as
    /// absent on first run so the bundled seed is used.
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Data file path: user provided or default
        let data_path = if let Some(name) = custom_data {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("locationData.json")
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            seed_file: None,
            show_images: default_show_images(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ Data file:   {:?}", data_path);

        Ok(())
    }
}

// This file is part of simple-window-summoner and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 simple-window-summoner contributors

use std::path::PathBuf;
use std::time::Duration;
use std::{fs, io};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::util::numeric::hz_to_tick_interval;

const DEFAULT_WIDTH: u32 = 480;
const DEFAULT_HEIGHT: u32 = 320;
const DEFAULT_COLOR: u32 = 0xFF2D2D30; // opaque dark grey
const DEFAULT_POLL_HZ: u32 = 30;

lazy_static! {
    pub static ref CONFIG_PATH: PathBuf = directories::ProjectDirs::from("io.github", "", "simple-window-summoner")
        .unwrap()
        .config_dir()
        .join("config.toml");
}

// needed for serde, as it can't read constants directly
const fn default_poll_hz() -> u32 {
    DEFAULT_POLL_HZ
}

#[derive(Deserialize, Serialize)]
pub struct PersistedSettings {
    pub window_width: u32,
    pub window_height: u32,
    #[serde(with = "crate::util::custom_serializer::argb_color")]
    pub color: u32,
    #[serde(default = "default_poll_hz")]
    poll_hz: u32,
    /// start with the window hidden to the tray instead of on screen
    #[serde(default)]
    pub start_hidden: bool,
}

impl PersistedSettings {
    fn load(self) -> Settings {
        let tick_interval = hz_to_tick_interval(self.poll_hz.max(1));
        Settings {
            persisted: self,
            tick_interval,
        }
    }
}

impl Default for PersistedSettings {
    fn default() -> Self {
        PersistedSettings {
            window_width: DEFAULT_WIDTH,
            window_height: DEFAULT_HEIGHT,
            color: DEFAULT_COLOR,
            poll_hz: DEFAULT_POLL_HZ,
            start_hidden: false,
        }
    }
}

pub struct Settings {
    pub persisted: PersistedSettings,
    /// how often the event loop wakes up to poll the tray menu channel
    pub tick_interval: Duration,
}

impl Settings {
    pub fn load() -> io::Result<Settings> {
        fs::create_dir_all(CONFIG_PATH.as_path().parent().unwrap())?;
        fs::read_to_string(CONFIG_PATH.as_path())
            .and_then(|string| {
                toml::from_str::<PersistedSettings>(&string)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            })
            .map(|settings| settings.load())
    }

    pub fn save(&self) -> Result<(), String> {
        let serialized_config = toml::to_string(&self.persisted).expect("failed to serialize settings");
        fs::write(CONFIG_PATH.as_path(), serialized_config).map_err(|e| format!("{e:?}"))
    }
}

impl Default for Settings {
    fn default() -> Self {
        PersistedSettings::default().load()
    }
}

#[cfg(test)]
mod test_settings {
    use super::*;

    /// old configs without the newer keys must still parse
    #[test]
    fn minimal_config_parses_with_defaults() {
        let settings: PersistedSettings =
            toml::from_str("window_width = 100\nwindow_height = 50\ncolor = \"FF112233\"").unwrap();
        assert_eq!(settings.window_width, 100);
        assert_eq!(settings.window_height, 50);
        assert_eq!(settings.color, 0xFF112233);
        assert_eq!(settings.poll_hz, DEFAULT_POLL_HZ);
        assert!(!settings.start_hidden);
    }

    #[test]
    fn default_settings_round_trip() {
        let serialized = toml::to_string(&PersistedSettings::default()).unwrap();
        let settings: PersistedSettings = toml::from_str(&serialized).unwrap();
        assert_eq!(settings.color, DEFAULT_COLOR);
        assert_eq!(settings.window_width, DEFAULT_WIDTH);
    }
}

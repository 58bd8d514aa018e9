use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::GrubError;

const SETTINGS_FILE: &str = "/etc/grubsort.json";
const SETTINGS_ENV: &str = "GRUBSORT_CONFIG";

/// System paths and commands. Any field missing from the JSON file keeps its
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub defaults_path: PathBuf,
    pub grub_cfg_path: PathBuf,
    pub override_script_path: PathBuf,
    pub elevate_command: PathBuf,
    pub generator_command: String,
    pub disable_os_prober_on_save: bool,
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            defaults_path: PathBuf::from("/etc/default/grub"),
            grub_cfg_path: PathBuf::from("/boot/grub/grub.cfg"),
            override_script_path: PathBuf::from("/etc/grub.d/42_custom_proxy"),
            elevate_command: PathBuf::from("/usr/bin/pkexec"),
            generator_command: "grub-mkconfig".to_string(),
            disable_os_prober_on_save: true,
            log_file: env::temp_dir().join("grubsort.log"),
        }
    }
}

impl Settings {
    /// Load from `$GRUBSORT_CONFIG`, or /etc/grubsort.json.
    pub fn load() -> Result<Self, GrubError> {
        let path = env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, GrubError> {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| GrubError::Settings(format!("{}: {}", path.display(), e))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(e) => Err(GrubError::read(path, e)),
        }
    }
}

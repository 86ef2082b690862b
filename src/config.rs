use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::extract::Dialect;

pub const CONFIG_FILE_NAME: &str = ".msgcatrc.json";

/// Maximum number of characters kept from a source line as an occurrence snippet.
pub const SNIPPET_MAX_CHARS: usize = 220;

/// Maximum number of occurrences rendered per message before truncation.
pub const MAX_OCCURRENCES_DISPLAY: usize = 6;

/// One scan target: a named project segment with its own root and dialect.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub name: String,
    pub root: String,
    /// Recognized extensions, each including the leading dot (e.g. ".dart").
    pub extensions: Vec<String>,
    pub dialect: Dialect,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_areas")]
    pub areas: Vec<Area>,
    /// Directory names pruning the whole subtree when met as a path segment.
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,
    /// Substrings marking a UI line as a plausible message site.
    #[serde(default = "default_ui_markers")]
    pub ui_markers: Vec<String>,
    /// Substrings marking a UI line as structural widget config, not a message.
    #[serde(default = "default_ui_exclusions")]
    pub ui_exclusions: Vec<String>,
    /// Substrings marking a backend line as an exception or HTTP response site.
    #[serde(default = "default_backend_markers")]
    pub backend_markers: Vec<String>,
    /// Lowercase target-language fragments a UI message must contain.
    #[serde(default = "default_vocabulary")]
    pub vocabulary: Vec<String>,
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_areas() -> Vec<Area> {
    vec![
        Area {
            name: "Desktop (Flutter)".to_string(),
            root: "desktop/lib".to_string(),
            extensions: vec![".dart".to_string()],
            dialect: Dialect::Ui,
        },
        Area {
            name: "Mobile (Flutter)".to_string(),
            root: "mobile/lib".to_string(),
            extensions: vec![".dart".to_string()],
            dialect: Dialect::Ui,
        },
        Area {
            name: "Backend (.NET)".to_string(),
            root: "backend".to_string(),
            extensions: vec![".cs".to_string()],
            dialect: Dialect::Backend,
        },
    ]
}

fn default_skip_dirs() -> Vec<String> {
    ["build", ".dart_tool", "obj", "bin"].map(String::from).to_vec()
}

fn default_ui_markers() -> Vec<String> {
    [
        "SnackBar",
        "showSnackBar",
        "validator",
        "return '",
        "AlertDialog",
        "content:",
    ]
    .map(String::from)
    .to_vec()
}

fn default_ui_exclusions() -> Vec<String> {
    [
        "DataColumn(",
        "DataCell(",
        "NavigationRailDestination(",
        "DropdownMenuItem",
        "labelText:",
        "hintText:",
        "tooltip:",
    ]
    .map(String::from)
    .to_vec()
}

fn default_backend_markers() -> Vec<String> {
    [
        "throw",
        "BadRequest",
        "Unauthorized",
        "Forbid",
        "NotFound",
        "Conflict",
    ]
    .map(String::from)
    .to_vec()
}

fn default_vocabulary() -> Vec<String> {
    [
        "grešk", "uspješn", "obavez", "molimo", "pokušaj", "odaber", "ne može", "neisprav",
        "pristup", "sigurn", "odust", "odjav", "nema", "blok", "važe", "rasprod", "refund",
        "otkaz", "plać", "potvrd",
    ]
    .map(String::from)
    .to_vec()
}

fn default_output() -> String {
    "tools/out/APP_MESSAGES_CATALOG.md".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            areas: default_areas(),
            skip_dirs: default_skip_dirs(),
            ui_markers: default_ui_markers(),
            ui_exclusions: default_ui_exclusions(),
            backend_markers: default_backend_markers(),
            vocabulary: default_vocabulary(),
            output: default_output(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Extensions must carry their leading dot because matching against file
    /// names is exact, and vocabulary fragments must already be lowercase
    /// because the filter lowercases only the message side.
    pub fn validate(&self) -> Result<()> {
        if self.areas.is_empty() {
            bail!("Config defines no areas to scan");
        }
        for area in &self.areas {
            if area.extensions.is_empty() {
                bail!("Area \"{}\" lists no file extensions", area.name);
            }
            for ext in &area.extensions {
                if !ext.starts_with('.') {
                    bail!(
                        "Extension \"{}\" in area \"{}\" must start with '.'",
                        ext,
                        area.name
                    );
                }
            }
        }
        for fragment in &self.vocabulary {
            if *fragment != fragment.to_lowercase() {
                bail!("Vocabulary fragment \"{}\" must be lowercase", fragment);
            }
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

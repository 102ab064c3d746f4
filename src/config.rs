use crate::log_debug;
use crate::presets::{DefaultTheme, DefaultThemeOverrides, PresetError};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Project configuration filename, looked up in the working directory
pub const PROJECT_CONFIG_FILENAME: &str = "presets.toml";

/// Configuration for a generation run
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Preset catalog to read
    #[serde(default = "default_source")]
    pub source: PathBuf,
    /// Where the stylesheet is written
    #[serde(default = "default_stylesheet_output")]
    pub stylesheet_output: PathBuf,
    /// Where the metadata module is written
    #[serde(default = "default_metadata_output")]
    pub metadata_output: PathBuf,
    /// Presets to emit; empty means every preset in the catalog
    #[serde(default = "default_allowed_presets")]
    pub allowed_presets: Vec<String>,
    /// Indentation width of top-level catalog entries
    #[serde(default = "default_entry_indent")]
    pub entry_indent: usize,
    /// Command shown in the generated files' banner
    #[serde(default = "default_regenerate_command")]
    pub regenerate_command: String,
    /// Overrides layered on the builtin default theme
    #[serde(default)]
    pub default_theme: DefaultThemeOverrides,
    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

fn default_source() -> PathBuf {
    PathBuf::from("reference/tweakcn/utils/theme-presets.ts")
}

fn default_stylesheet_output() -> PathBuf {
    PathBuf::from("src/lib/themes/presets.css")
}

fn default_metadata_output() -> PathBuf {
    PathBuf::from("src/lib/themes/preset-data.ts")
}

fn default_allowed_presets() -> Vec<String> {
    ["modern-minimal", "notebook", "darkmatter"]
        .map(String::from)
        .to_vec()
}

fn default_entry_indent() -> usize {
    crate::presets::extract::DEFAULT_ENTRY_INDENT
}

fn default_regenerate_command() -> String {
    "preset-gen".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            stylesheet_output: default_stylesheet_output(),
            metadata_output: default_metadata_output(),
            allowed_presets: default_allowed_presets(),
            entry_indent: default_entry_indent(),
            regenerate_command: default_regenerate_command(),
            default_theme: DefaultThemeOverrides::default(),
            base_dir: PathBuf::from("."),
        }
    }
}

impl GeneratorConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, `presets.toml` in the working
    /// directory is used if present, and the builtin defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, PresetError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let project = Path::new(PROJECT_CONFIG_FILENAME);
        if project.exists() {
            return Self::load_from_file(project);
        }

        log_debug!("No {} found, using builtin configuration", PROJECT_CONFIG_FILENAME);
        Ok(Self::default())
    }

    /// Load configuration from a TOML file; relative paths resolve against its directory
    pub fn load_from_file(path: &Path) -> Result<Self, PresetError> {
        let content = fs::read_to_string(path).map_err(|source| PresetError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content, path)?;
        config.base_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        log_debug!("Configuration loaded from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse configuration text; `path` is only used for error reporting
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, PresetError> {
        let mut config: Self = toml::from_str(content).map_err(|source| PresetError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        config.base_dir = PathBuf::from(".");
        Ok(config)
    }

    /// Resolve a configured path against the base directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn source_path(&self) -> PathBuf {
        self.resolve(&self.source)
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.resolve(&self.stylesheet_output)
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.resolve(&self.metadata_output)
    }

    /// The builtin default theme with this configuration's overrides applied
    pub fn default_theme(&self) -> DefaultTheme {
        DefaultTheme::builtin().with_overrides(&self.default_theme)
    }
}

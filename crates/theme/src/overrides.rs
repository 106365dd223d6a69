use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use inkwork_paint::{Color, ColorParseError};
use serde::Deserialize;
use thiserror::Error;

use crate::registry::{ColorRole, ThemeColor, ThemeRegistry};

/// Errors raised while loading theme override files.
#[derive(Debug, Error)]
pub enum ThemeLoadError {
    #[error("failed to enumerate theme directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read theme file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse theme file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("theme file {path} names unknown color role '{role}'")]
    UnknownRole { path: PathBuf, role: String },
    #[error("invalid color '{value}' for role '{role}': {reason}")]
    InvalidColor {
        role: String,
        value: String,
        reason: ColorParseError,
    },
}

/// On-disk shape of one role override: a full light/dark pair. Partial
/// overrides are rejected by the file model rather than half-merged.
#[derive(Debug, Deserialize)]
struct ThemeColorDef {
    light: String,
    dark: String,
}

type ThemeFile = BTreeMap<String, ThemeColorDef>;

impl ThemeRegistry {
    /// Builds a registry from the builtin table plus every `.json` override
    /// file in `path`, applied in file-name order. A missing or empty
    /// directory yields the builtin table unchanged.
    pub fn load_from_dir(path: impl AsRef<Path>) -> Result<Self, ThemeLoadError> {
        let dir = path.as_ref();
        let mut registry = Self::builtin();
        if !dir.is_dir() {
            return Ok(registry);
        }

        let mut paths = Vec::new();
        let entries = fs::read_dir(dir).map_err(|source| ThemeLoadError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| ThemeLoadError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
            {
                paths.push(path);
            }
        }
        paths.sort();

        for path in paths {
            registry = apply_file(registry, &path)?;
        }
        Ok(registry)
    }
}

fn apply_file(mut registry: ThemeRegistry, path: &Path) -> Result<ThemeRegistry, ThemeLoadError> {
    let data = fs::read_to_string(path).map_err(|source| ThemeLoadError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ThemeFile =
        serde_json::from_str(&data).map_err(|source| ThemeLoadError::ParseFile {
            path: path.to_path_buf(),
            source,
        })?;

    for (name, def) in file {
        let role = ColorRole::from_name(&name).ok_or_else(|| ThemeLoadError::UnknownRole {
            path: path.to_path_buf(),
            role: name.clone(),
        })?;
        let light = parse_color(&name, &def.light)?;
        let dark = parse_color(&name, &def.dark)?;
        registry = registry.with_color(role, ThemeColor::new(light, dark));
    }
    Ok(registry)
}

fn parse_color(role: &str, value: &str) -> Result<Color, ThemeLoadError> {
    Color::from_hex(value).map_err(|reason| ThemeLoadError::InvalidColor {
        role: role.to_string(),
        value: value.to_string(),
        reason,
    })
}

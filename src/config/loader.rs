//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AstroDbError, AstroDbResult};

use super::types::{Config, ConfigSource, ConfigWarning, LoadedConfig};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "astrodb.toml";

/// The dataset shipped with the tool.
///
/// A `data/` directory holding `signs.json` beside the executable, or one
/// level above it, wins; otherwise the crate's own `data/`. Never depends on
/// the working directory.
pub fn bundled_data_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| data_dir_beside(&exe))
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
}

fn data_dir_beside(exe: &Path) -> Option<PathBuf> {
    exe.ancestors()
        .skip(1)
        .take(2)
        .map(|dir| dir.join("data"))
        .find(|dir| dir.join("signs.json").is_file())
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AstroDbResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| AstroDbError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AstroDbError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn resolve(project_root: &Path) -> AstroDbResult<LoadedConfig> {
    resolve_from(project_root, dirs::config_dir(), |key| std::env::var(key).ok())
}

pub(crate) fn resolve_from(
    project_root: &Path,
    user_config_dir: Option<PathBuf>,
    get_env: impl Fn(&str) -> Option<String>,
) -> AstroDbResult<LoadedConfig> {
    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    let user_config = user_config_dir.map(|dir| dir.join("astrodb/config.toml"));

    let (config, source, warnings) = if project_config.is_file() {
        let (config, warnings) = load_with_warnings(&project_config)?;
        (config, ConfigSource::Project(project_config), warnings)
    } else if let Some(user_config) = user_config.filter(|p| p.is_file()) {
        let (config, warnings) = load_with_warnings(&user_config)?;
        (config, ConfigSource::User(user_config), warnings)
    } else {
        (Config::default(), ConfigSource::Defaults, Vec::new())
    };

    Ok(LoadedConfig {
        config: apply_env_overrides(config, get_env),
        source,
        warnings,
    })
}

/// Apply environment variable overrides (ASTRODB_* prefix)
pub(crate) fn apply_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // ASTRODB_DATA_DIR
    if let Some(dir) = get_env("ASTRODB_DATA_DIR").filter(|d| !d.trim().is_empty()) {
        config.data.dir = PathBuf::from(dir);
    }

    // ASTRODB_EXTENDED
    if let Some(val) = get_env("ASTRODB_EXTENDED") {
        config.checks.extended = matches!(
            val.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        );
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["data", "dir", "checks", "extended", "output", "summary"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("extended", "extended"), 0);
        assert_eq!(levenshtein("extnded", "extended"), 1);
        assert_eq!(levenshtein("", "dir"), 3);
    }

    #[test]
    fn test_suggest_key() {
        assert_eq!(suggest_key("summery").as_deref(), Some("summary"));
        assert_eq!(suggest_key("colour"), None);
    }

    #[test]
    fn test_data_dir_beside_executable() {
        let root = tempfile::tempdir().unwrap();
        let bin = root.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        let exe = bin.join("astrodb");

        assert_eq!(data_dir_beside(&exe), None);

        fs::create_dir_all(root.path().join("data")).unwrap();
        fs::write(root.path().join("data/signs.json"), "[]").unwrap();
        assert_eq!(data_dir_beside(&exe), Some(root.path().join("data")));

        fs::create_dir_all(bin.join("data")).unwrap();
        fs::write(bin.join("data/signs.json"), "[]").unwrap();
        assert_eq!(data_dir_beside(&exe), Some(bin.join("data")));
    }

    #[test]
    fn test_bundled_data_dir_is_absolute() {
        let dir = bundled_data_dir();
        assert!(dir.is_absolute());
        assert!(dir.join("signs.json").is_file());
    }

    #[test]
    fn test_find_line_number() {
        let content = "[data]\ndir = \"data\"\n\n[checks]\nextnded = true\n";
        assert_eq!(find_line_number(content, "extnded"), Some(5));
        assert_eq!(find_line_number(content, "missing"), None);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Where ArtSpace looks for `settings.toml`.
//!
//! The first source that yields a directory wins:
//!
//! 1. a path passed by the caller (tests, `--init-config` targets)
//! 2. `--config-dir`, registered once through [`init_cli_overrides`]
//! 3. the `ART_SPACE_CONFIG_DIR` environment variable, unless empty
//! 4. `ArtSpace/` under the platform config directory

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "ArtSpace";

/// Environment variable naming an alternative config directory.
pub const ENV_CONFIG_DIR: &str = "ART_SPACE_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` flag. Later calls are ignored with a warning.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("--config-dir was already registered; keeping the first value");
    }
}

/// Returns the directory holding `settings.toml`, or `None` when no
/// platform config directory exists and nothing overrides it.
#[must_use]
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        explicit,
        CLI_CONFIG_DIR.get().cloned().flatten(),
        std::env::var(ENV_CONFIG_DIR).ok(),
        dirs::config_dir(),
    )
}

fn resolve(
    explicit: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<String>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .or(cli)
        .or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| platform.map(|base| base.join(APP_DIR_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Option<PathBuf> {
        Some(PathBuf::from("/home/visitor/.config"))
    }

    #[test]
    fn explicit_path_beats_everything() {
        let dir = resolve(
            Some(PathBuf::from("/explicit")),
            Some(PathBuf::from("/cli")),
            Some("/env".to_string()),
            platform(),
        );
        assert_eq!(dir, Some(PathBuf::from("/explicit")));
    }

    #[test]
    fn cli_flag_beats_environment() {
        let dir = resolve(
            None,
            Some(PathBuf::from("/cli")),
            Some("/env".to_string()),
            platform(),
        );
        assert_eq!(dir, Some(PathBuf::from("/cli")));
    }

    #[test]
    fn environment_beats_platform_default() {
        let dir = resolve(None, None, Some("/env".to_string()), platform());
        assert_eq!(dir, Some(PathBuf::from("/env")));
    }

    #[test]
    fn empty_environment_value_is_skipped() {
        let dir = resolve(None, None, Some(String::new()), platform());
        assert_eq!(dir, Some(PathBuf::from("/home/visitor/.config/ArtSpace")));
    }

    #[test]
    fn no_source_yields_none() {
        assert_eq!(resolve(None, None, None, None), None);
    }

    #[test]
    fn explicit_path_is_returned_as_is() {
        let explicit = PathBuf::from("/tmp/art-space-settings");
        assert_eq!(config_dir(Some(explicit.clone())), Some(explicit));
    }
}

//! Default configuration file locations.

use std::path::PathBuf;

use either::Either;

/// Application directory and file stem used in the default paths.
pub const APP_NAME: &str = "mail-segment";

/// Returns an iterator over default configuration file paths.
///
/// The paths are yielded in order of preference:
/// 1. User config directory (XDG on Linux).
/// 2. Dotfiles in the home directory.
/// 3. System-wide config.
pub fn defaults() -> impl Iterator<Item = PathBuf> {
    let config_path = dirs::config_dir().into_iter().flat_map(|dir| {
        [
            dir.join(APP_NAME).join("config.yaml"),
            dir.join(format!("{APP_NAME}.yaml")),
        ]
    });
    let home_path = dirs::home_dir()
        .into_iter()
        .map(|dir| dir.join(format!(".{APP_NAME}.yaml")));
    let system_path =
        std::iter::once_with(|| PathBuf::from("/etc").join(APP_NAME).join("config.yaml"));

    config_path.chain(home_path).chain(system_path)
}

/// Resolves configuration paths: the explicit path alone if given, the defaults otherwise.
pub fn resolve(explicit: Option<PathBuf>) -> impl Iterator<Item = PathBuf> {
    match explicit {
        Some(path) => Either::Left(std::iter::once(path)),
        None => Either::Right(defaults()),
    }
}

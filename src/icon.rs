use std::path::{Path, PathBuf};

use log::trace;

pub const ICON_FILE_NAME: &str = "icon.svg";

pub const FALLBACK_ICON: &str = r##"<svg viewBox="0 0 256 256" xmlns="http://www.w3.org/2000/svg"><rect width="256" height="256" rx="24" fill="#6C33AF"/><path fill="#fff" d="M64 96h128v24H64zm0 40h96v24H64z"/></svg>"##;

/// `icon.svg` next to the running executable, if its location is known.
pub fn default_icon_path() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(ICON_FILE_NAME)))
}

/// Reads the SVG at `path`, falling back to the built-in icon on any failure.
pub fn load_icon(path: Option<&Path>) -> String {
    let Some(path) = path else {
        return FALLBACK_ICON.to_string();
    };
    match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) => {
            trace!("Using fallback icon, could not read {}: {}", path.display(), error);
            FALLBACK_ICON.to_string()
        }
    }
}

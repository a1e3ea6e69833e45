//! Loading viewer snapshots supplied by the host.

use std::fs;
use std::path::Path;

use hidethis_rules::context::ViewerContext;

use crate::error::AppResult;

/// Read a viewer snapshot from a JSON file.
///
/// Missing fields take their anonymous defaults, so `{}` is the anonymous
/// viewer.
pub fn load_viewer(path: &Path) -> AppResult<ViewerContext> {
    let raw = fs::read_to_string(path)?;
    parse_viewer(&raw)
}

pub fn parse_viewer(raw: &str) -> AppResult<ViewerContext> {
    let viewer: ViewerContext = serde_json::from_str(raw)?;
    tracing::debug!(
        logged_in = viewer.is_logged_in,
        roles = viewer.roles.len(),
        "viewer context loaded"
    );
    Ok(viewer)
}

// Alias symlinks for compiled cursors

use anyhow::{Context, Result};
use std::os::unix::fs as unix_fs;
use std::path::Path;

use crate::model::cursor::CursorDef;

/// Create one symlink per alias inside `output_dir`. Link targets are the
/// bare canonical name, resolved relative to the directory the link lives in.
///
/// There is no existence check: a pre-existing path at an alias is an error
/// the caller is expected to abort on.
pub fn link_aliases(def: &CursorDef, output_dir: &Path) -> Result<usize> {
    let mut created = 0;

    for alias in def.aliases {
        let link = output_dir.join(alias);
        unix_fs::symlink(def.name, &link)
            .with_context(|| format!("failed to link {} -> {}", link.display(), def.name))?;
        created += 1;
    }

    Ok(created)
}

pub mod instructions;
pub mod symlinks;
pub mod xcursorgen;


use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::model::cursor::CursorDef;

/// Per-stage counts for one full run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub instruction_files: usize,
    pub compiled: usize,
    pub compile_failures: usize,
    pub links: usize,
}

/// Run the three stages over the whole table, each as one full pass:
/// instruction files, then compilation, then alias links.
///
/// Stages 1 and 2 isolate failures per cursor; a cursor whose instruction
/// file could not be written is dropped from the later stages. Stage 3 has no
/// isolation - the first link failure aborts the run.
pub fn run(cursors: &[CursorDef], cfg: &Config) -> Result<RunSummary> {
    if !cfg.output_dir.exists() {
        info!("creating output directory {}", cfg.output_dir.display());
        fs::create_dir_all(&cfg.output_dir).with_context(|| {
            format!(
                "failed to create output directory {}",
                cfg.output_dir.display()
            )
        })?;
    }

    let mut summary = RunSummary::default();

    let mut prepared: Vec<(&CursorDef, PathBuf)> = Vec::new();
    for def in cursors {
        info!("processing cursor: {}", def.name);
        match instructions::write_instruction_file(def, cfg) {
            Ok(path) => {
                info!("generated instruction file {}", path.display());
                prepared.push((def, path));
            }
            Err(e) => error!("skipping {}: {:#}", def.name, e),
        }
    }
    summary.instruction_files = prepared.len();

    for (def, in_file) in &prepared {
        let out_file = cfg.output_dir.join(def.name);
        debug!(
            "running {} {} {}",
            cfg.compiler.display(),
            in_file.display(),
            out_file.display()
        );
        match xcursorgen::compile(&cfg.compiler, in_file, &out_file) {
            Ok(outcome) if outcome.success() => {
                info!("generated cursor {}", out_file.display());
                summary.compiled += 1;
            }
            Ok(outcome) => {
                error!("xcursorgen failed for {}: {}", def.name, outcome.describe());
                summary.compile_failures += 1;
            }
            Err(e) => {
                error!("xcursorgen failed for {}: {:#}", def.name, e);
                summary.compile_failures += 1;
            }
        }
    }

    for (def, _) in &prepared {
        summary.links += symlinks::link_aliases(def, &cfg.output_dir)?;
    }

    info!(
        "done: {} instruction files, {} compiled ({} failed), {} alias links",
        summary.instruction_files, summary.compiled, summary.compile_failures, summary.links
    );

    Ok(summary)
}

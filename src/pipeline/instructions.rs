// Instruction file generation - scales hotspots to each target size and
// emits the per-frame input lines xcursorgen consumes

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::config::Config;
use crate::model::cursor::CursorDef;

/// Scale a hotspot coordinate authored at `nominal` to `size` pixels.
/// Unsigned integer division truncates, which is floor over this domain.
pub fn scale_hotspot(coord: u32, size: u32, nominal: u32) -> u32 {
    coord * size / nominal
}

/// Source image file name for one frame. Animated cursors carry a 1-based,
/// two-digit frame suffix.
pub fn frame_file_name(def: &CursorDef, frame: u32) -> String {
    if def.is_animated() {
        format!("{}_{:02}.png", def.name, frame)
    } else {
        format!("{}.png", def.name)
    }
}

/// Path of one source image as written into the instruction file, relative to
/// the directory the tool runs from.
pub fn frame_image_path(def: &CursorDef, cfg: &Config, size: u32, frame: u32) -> PathBuf {
    cfg.png_dir
        .join(format!("{size}x{size}"))
        .join(frame_file_name(def, frame))
}

/// Render the instruction file content for one cursor: one line per
/// (size, frame) pair, sizes outermost in configured order, frames ascending.
pub fn instruction_content(def: &CursorDef, cfg: &Config) -> String {
    let mut content = String::new();

    for &size in &cfg.sizes {
        let hx = scale_hotspot(def.hotspot.0, size, cfg.nominal_size);
        let hy = scale_hotspot(def.hotspot.1, size, cfg.nominal_size);

        for frame in def.frame_indices() {
            let image = frame_image_path(def, cfg, size, frame);
            content.push_str(&format!("{} {} {} {}", size, hx, hy, image.display()));
            if let Some(anim) = def.animation {
                content.push_str(&format!(" {}", anim.delay_ms));
            }
            content.push('\n');
        }
    }

    content
}

/// Write `{name}.in` into the PNG root and return its path.
///
/// Referenced source images are probed first and missing ones logged as
/// warnings; the file is written regardless, since xcursorgen has the final
/// say on whether the input set is usable.
pub fn write_instruction_file(def: &CursorDef, cfg: &Config) -> Result<PathBuf> {
    check_source_images(def, cfg);

    let path = cfg.png_dir.join(format!("{}.in", def.name));
    fs::write(&path, instruction_content(def, cfg))
        .with_context(|| format!("failed to write instruction file {}", path.display()))?;

    Ok(path)
}

fn check_source_images(def: &CursorDef, cfg: &Config) {
    for &size in &cfg.sizes {
        for frame in def.frame_indices() {
            let image = frame_image_path(def, cfg, size, frame);
            if !image.exists() {
                warn!("missing source image {}", image.display());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cursor::Animation;
    use std::path::PathBuf;

    fn test_config(sizes: Vec<u32>) -> Config {
        Config {
            png_dir: PathBuf::from("pngs"),
            output_dir: PathBuf::from("out"),
            compiler: PathBuf::from("xcursorgen"),
            sizes,
            nominal_size: 32,
        }
    }

    const MOVE: CursorDef = CursorDef {
        name: "move",
        hotspot: (11, 11),
        animation: None,
        aliases: &["fleur"],
    };

    const WAIT: CursorDef = CursorDef {
        name: "wait",
        hotspot: (16, 16),
        animation: Some(Animation {
            frames: 18,
            delay_ms: 50,
        }),
        aliases: &["watch"],
    };

    #[test]
    fn test_scale_is_identity_at_nominal_size() {
        for coord in [0, 1, 4, 11, 16, 31] {
            assert_eq!(scale_hotspot(coord, 32, 32), coord);
        }
    }

    #[test]
    fn test_scale_floors_fractional_results() {
        assert_eq!(scale_hotspot(11, 16, 32), 5);
        assert_eq!(scale_hotspot(1, 16, 32), 0);
        assert_eq!(scale_hotspot(3, 16, 32), 1);
        assert_eq!(scale_hotspot(11, 48, 32), 16);
        assert_eq!(scale_hotspot(16, 24, 32), 12);
        assert_eq!(scale_hotspot(0, 64, 32), 0);
    }

    #[test]
    fn test_frame_file_name_padding() {
        assert_eq!(frame_file_name(&MOVE, 1), "move.png");
        assert_eq!(frame_file_name(&WAIT, 1), "wait_01.png");
        assert_eq!(frame_file_name(&WAIT, 7), "wait_07.png");
        assert_eq!(frame_file_name(&WAIT, 18), "wait_18.png");
    }

    #[test]
    fn test_static_cursor_single_line() {
        let cfg = test_config(vec![32]);
        assert_eq!(
            instruction_content(&MOVE, &cfg),
            "32 11 11 pngs/32x32/move.png\n"
        );
    }

    #[test]
    fn test_animated_cursor_lines() {
        let cfg = test_config(vec![32]);
        let content = instruction_content(&WAIT, &cfg);
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 18);
        for (idx, line) in lines.iter().enumerate() {
            assert_eq!(
                *line,
                format!("32 16 16 pngs/32x32/wait_{:02}.png 50", idx + 1)
            );
        }
    }

    #[test]
    fn test_line_count_is_frames_times_sizes() {
        let cfg = test_config(vec![32, 16]);
        assert_eq!(instruction_content(&WAIT, &cfg).lines().count(), 36);
        assert_eq!(instruction_content(&MOVE, &cfg).lines().count(), 2);
    }

    #[test]
    fn test_sizes_are_emitted_outermost() {
        let cfg = test_config(vec![32, 16]);
        let content = instruction_content(&WAIT, &cfg);
        let lines: Vec<&str> = content.lines().collect();

        // All 18 frames of the first size precede the second size, with the
        // hotspot rescaled per size block.
        assert_eq!(lines[0], "32 16 16 pngs/32x32/wait_01.png 50");
        assert_eq!(lines[17], "32 16 16 pngs/32x32/wait_18.png 50");
        assert_eq!(lines[18], "16 8 8 pngs/16x16/wait_01.png 50");
        assert_eq!(lines[35], "16 8 8 pngs/16x16/wait_18.png 50");
    }
}

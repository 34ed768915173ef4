use std::path::PathBuf;

/// Immutable run configuration, passed explicitly into each pipeline stage.
#[derive(Clone, Debug)]
pub struct Config {
    /// Root of the pre-rendered PNGs, holding one `{s}x{s}` subdirectory per
    /// target size. Instruction files are written here as well.
    pub png_dir: PathBuf,
    /// Where compiled cursors and alias symlinks land.
    pub output_dir: PathBuf,
    /// The xcursorgen executable; a bare name is resolved through PATH.
    pub compiler: PathBuf,
    /// Sizes to render each cursor at, in emission order.
    pub sizes: Vec<u32>,
    /// Reference size the table's hotspots are authored at.
    pub nominal_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            png_dir: PathBuf::from("pngs"),
            output_dir: PathBuf::from("../../Windows 7/cursors"),
            compiler: PathBuf::from("xcursorgen"),
            sizes: vec![32],
            nominal_size: 32,
        }
    }
}

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::ports::surface::Surface;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(fs::File::create(filepath)?);
        write_ppm(buffer, &mut file)?;
        file.flush()
    }
}

/// Encodes a buffer as binary PPM (P6, 8 bits per channel).
pub fn write_ppm(buffer: &PixelBuffer, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", buffer.width(), buffer.height())?;
    writeln!(out, "255")?;
    out.write_all(buffer.buffer())
}

//! PNG encoding for RGB8 rasters.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::RenderError;

use super::raster::Raster;

/// Write `image` to `path` as an 8-bit RGB PNG.
pub fn write_png(path: &Path, image: &Raster) -> Result<(), RenderError> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder
        .write_header()
        .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    writer
        .write_image_data(image.data())
        .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::raster::Rgb;

    fn decode(path: &Path) -> (u32, u32, Vec<u8>) {
        let decoder = png::Decoder::new(File::open(path).unwrap());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0u8; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info.width, info.height, buf)
    }

    #[test]
    fn test_round_trips_pixel_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tile.png");
        let fill: Rgb = [12, 200, 99];
        let image = Raster::filled(8, 4, fill);

        write_png(&path, &image).unwrap();

        let (width, height, data) = decode(&path);
        assert_eq!((width, height), (8, 4));
        assert_eq!(data, image.data());
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let image = Raster::filled(2, 2, [0, 0, 0]);
        let error = write_png(Path::new("/nonexistent-dir/out.png"), &image).unwrap_err();
        match error {
            RenderError::Io(_) => {}
            other => panic!("Expected Io, got {other:?}"),
        }
    }
}

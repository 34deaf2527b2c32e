//! PNG snapshots of a filled frame, with the view embedded as tEXt chunks.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::debug;

use phasebrot_core::ViewportState;

use crate::buffer::FrameBuffer;

/// Key/value pairs describing the view a frame was rendered from.
fn view_metadata(state: &ViewportState) -> Vec<(String, String)> {
    vec![
        ("Phasebrot.CenterRe".into(), state.center.re.to_string()),
        ("Phasebrot.CenterIm".into(), state.center.im.to_string()),
        ("Phasebrot.Scale".into(), state.scale.to_string()),
        ("Phasebrot.Phase".into(), state.phase.to_string()),
        (
            "Phasebrot.Resolution".into(),
            format!("{}x{}", state.width, state.height),
        ),
    ]
}

/// File name for a snapshot of `state`, unique per phase and view.
pub fn snapshot_file_name(state: &ViewportState) -> String {
    format!(
        "phasebrot_{}x{}_phase{:06}.png",
        state.width, state.height, state.phase
    )
}

/// Write `buffer` as an opaque 8-bit RGBA PNG at `path`.
pub fn export_png(buffer: &FrameBuffer, state: &ViewportState, path: &Path) -> crate::Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, buffer.width(), buffer.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder.add_text_chunk("Software".to_string(), "Phasebrot".to_string())?;
    encoder.add_text_chunk(
        "Description".to_string(),
        format!(
            "Center: {}, Scale: {}, Phase: {}",
            state.center, state.scale, state.phase
        ),
    )?;
    for (key, value) in view_metadata(state) {
        encoder.add_text_chunk(key, value)?;
    }

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.to_rgba_opaque())?;
    png_writer.finish()?;

    debug!(
        "Exported PNG {}x{} to {}",
        buffer.width(),
        buffer.height(),
        path.display()
    );
    Ok(())
}

/// Write a snapshot into `dir` (created if missing) and return its path.
pub fn save_snapshot(
    buffer: &FrameBuffer,
    state: &ViewportState,
    dir: &Path,
) -> crate::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(snapshot_file_name(state));
    export_png(buffer, state, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::fill;
    use std::io::Read;

    #[test]
    fn export_creates_valid_png() {
        let mut state = ViewportState::new(16, 12).unwrap();
        state.phase = 5;
        let mut buffer = FrameBuffer::for_viewport(&state).unwrap();
        fill(&mut buffer, &state);

        let dir = std::env::temp_dir().join("phasebrot_export_test");
        let path = save_snapshot(&buffer, &state, &dir).unwrap();
        assert!(path.ends_with("phasebrot_16x12_phase000005.png"));

        let mut data = Vec::new();
        std::fs::File::open(&path)
            .unwrap()
            .read_to_end(&mut data)
            .unwrap();
        assert_eq!(&data[..8], b"\x89PNG\r\n\x1a\n");

        let text = String::from_utf8_lossy(&data);
        assert!(text.contains("Phasebrot.Phase"));
        assert!(text.contains("16x12"));

        let decoder = png::Decoder::new(std::fs::File::open(&path).unwrap());
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (16, 12));
        assert_eq!(info.color_type, png::ColorType::Rgba);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let state = ViewportState::new(2, 2).unwrap();
        let buffer = FrameBuffer::for_viewport(&state).unwrap();
        let path = std::env::temp_dir()
            .join("phasebrot_no_such_dir")
            .join("nested")
            .join("out.png");
        assert!(export_png(&buffer, &state, &path).is_err());
    }
}

/// Sample frame loader
///
/// Decodes an image file off the UI thread and returns it as an iced image
/// handle together with its natural size.
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::FrameError;

/// A decoded frame ready for display
#[derive(Debug, Clone)]
pub struct LoadedFrame {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub handle: Handle,
}

/// Load and decode a frame
///
/// # Returns
/// * `Ok(LoadedFrame)` - RGBA handle and natural dimensions
/// * `Err(FrameError)` - missing file, undecodable data, or a failed task
pub async fn load_frame(path: PathBuf) -> Result<LoadedFrame, FrameError> {
    // Spawn blocking because decoding is CPU-bound
    task::spawn_blocking(move || load_frame_blocking(&path))
        .await
        .map_err(|e| FrameError::Join(e.to_string()))?
}

fn load_frame_blocking(path: &Path) -> Result<LoadedFrame, FrameError> {
    if !path.is_file() {
        return Err(FrameError::NotFound(path.to_path_buf()));
    }

    let img = image::open(path).map_err(|e| FrameError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    log::info!("Decoded frame {} ({}x{})", path.display(), width, height);

    Ok(LoadedFrame {
        path: path.to_path_buf(),
        width,
        height,
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reports_natural_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        image::RgbaImage::new(64, 48).save(&path).unwrap();

        let frame = load_frame(path.clone()).await.unwrap();
        assert_eq!((frame.width, frame.height), (64, 48));
        assert_eq!(frame.path, path);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = load_frame(PathBuf::from("/nonexistent/sample-frame.jpg")).await;
        assert_eq!(
            result.unwrap_err(),
            FrameError::NotFound(PathBuf::from("/nonexistent/sample-frame.jpg"))
        );
    }

    #[tokio::test]
    async fn test_undecodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        let result = load_frame(path).await;
        assert!(matches!(result, Err(FrameError::Decode { .. })));
    }
}

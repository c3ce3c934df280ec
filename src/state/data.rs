/// Shared data structures for the application state
///
/// These structs are plain values: they carry no widget handles and
/// are rendered by the UI layer.

/// One before/after pair shown in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseRecord {
    pub id: u32,
    /// Original image, relative to the asset directory
    pub original_image: &'static str,
    /// Edge-detected image, relative to the asset directory
    pub processed_image: &'static str,
    /// Canny lower hysteresis threshold
    pub lower: u32,
    /// Canny upper hysteresis threshold
    pub upper: u32,
    /// Gaussian blur kernel size
    pub blur: u32,
    /// Display-only frame rate label
    pub fps: &'static str,
}

/// Statistics snapshot of the live viewer
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStats {
    pub fps: u32,
    /// "WIDTHxHEIGHT", or "--" before anything is loaded
    pub resolution: String,
    pub processing_time_ms: f64,
    pub frame_count: u64,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            fps: 0,
            resolution: "--".to_string(),
            processing_time_ms: 0.0,
            frame_count: 0,
        }
    }
}

impl FrameStats {
    pub fn fps_label(&self) -> String {
        self.fps.to_string()
    }

    pub fn processing_time_label(&self) -> String {
        format!("{:.1}ms", self.processing_time_ms)
    }

    pub fn frame_count_label(&self) -> String {
        self.frame_count.to_string()
    }

    /// Merge a partial update into this snapshot
    pub fn apply(&mut self, update: StatsUpdate) {
        if let Some(fps) = update.fps {
            self.fps = fps;
        }
        if let Some(resolution) = update.resolution {
            self.resolution = resolution;
        }
        if let Some(processing_time_ms) = update.processing_time_ms {
            self.processing_time_ms = processing_time_ms;
        }
        if let Some(frame_count) = update.frame_count {
            self.frame_count = frame_count;
        }
    }
}

/// Partial statistics, fields left as `None` are kept
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsUpdate {
    pub fps: Option<u32>,
    pub resolution: Option<String>,
    pub processing_time_ms: Option<f64>,
    pub frame_count: Option<u64>,
}

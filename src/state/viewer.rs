/// Live viewer state
///
/// `ViewerState` holds only data. The application feeds it events (load
/// results, timer ticks, button presses) and renders what it reports; the
/// decoded frame itself lives in the UI layer.
use rand::Rng;
use std::time::{Duration, Instant};

use super::data::{FrameStats, StatsUpdate};

/// Statistics used when the sample frame cannot be loaded
const PLACEHOLDER_RESOLUTION: &str = "640x480";
const PLACEHOLDER_FPS: u32 = 30;
const PLACEHOLDER_PROCESSING_MS: f64 = 16.7;

/// Simulated processing time range in milliseconds
const PROCESSING_TIME_MS: std::ops::Range<f64> = 10.0..20.0;

/// Which element shows the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Image,
    Canvas,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Image => ViewMode::Canvas,
            ViewMode::Canvas => ViewMode::Image,
        }
    }
}

/// Progress of the current frame load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded { width: u32, height: u32 },
    Failed,
}

/// What a tick asks the UI to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Statistics were pushed to the display (start a highlight)
    pub published: bool,
    /// The canvas overlay changed and needs a redraw
    pub redraw_canvas: bool,
}

/// Timer-related tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Publish statistics every N ticks
    pub publish_every: u64,
    pub highlight: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            publish_every: 10,
            highlight: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewerState {
    mode: ViewMode,
    load: LoadStatus,
    /// Statistics updated on every tick
    current: FrameStats,
    /// Statistics last pushed to the display
    displayed: FrameStats,
    /// Ticks since startup; the source of `frame_count`
    frames: u64,
    overlay_text: String,
    running: bool,
    last_tick: Option<Instant>,
    highlight_until: Option<Instant>,
    overlay_alpha: f32,
    timing: Timing,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(Timing::default())
    }
}

impl ViewerState {
    pub fn new(timing: Timing) -> Self {
        Self {
            mode: ViewMode::Image,
            load: LoadStatus::Idle,
            current: FrameStats::default(),
            displayed: FrameStats::default(),
            frames: 0,
            overlay_text: String::new(),
            running: false,
            last_tick: None,
            highlight_until: None,
            overlay_alpha: 0.0,
            timing: Timing {
                publish_every: timing.publish_every.max(1),
                ..timing
            },
        }
    }

    // ========== Accessors ==========

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn load_status(&self) -> LoadStatus {
        self.load
    }

    /// Copy of the live statistics
    pub fn stats(&self) -> FrameStats {
        self.current.clone()
    }

    /// Statistics as last published to the display
    pub fn displayed(&self) -> &FrameStats {
        &self.displayed
    }

    pub fn overlay_text(&self) -> &str {
        &self.overlay_text
    }

    pub fn overlay_alpha(&self) -> f32 {
        self.overlay_alpha
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlight_until.is_some()
    }

    pub fn can_load(&self) -> bool {
        self.load != LoadStatus::Loading
    }

    pub fn load_button_label(&self) -> &'static str {
        match self.load {
            LoadStatus::Loading => "Loading...",
            LoadStatus::Failed => "Retry Loading",
            LoadStatus::Idle | LoadStatus::Loaded { .. } => "Load Sample Frame",
        }
    }

    pub fn toggle_button_label(&self) -> &'static str {
        match self.mode {
            ViewMode::Image => "Switch to Canvas View",
            ViewMode::Canvas => "Switch to Image View",
        }
    }

    // ========== Loading ==========

    /// A sample frame load was started
    pub fn begin_load(&mut self) {
        self.load = LoadStatus::Loading;
        self.overlay_text = "Loading sample frame...".to_string();
    }

    /// A user-picked frame load was started
    pub fn begin_custom_load(&mut self) {
        self.load = LoadStatus::Loading;
        self.overlay_text = "Loading custom image...".to_string();
    }

    /// The frame decoded with the given natural size
    pub fn frame_loaded(&mut self, width: u32, height: u32, now: Instant) {
        self.load = LoadStatus::Loaded { width, height };
        self.overlay_text = format!("Loaded frame: {}x{} pixels", width, height);
        self.apply_stats(
            StatsUpdate {
                resolution: Some(format!("{}x{}", width, height)),
                ..StatsUpdate::default()
            },
            now,
        );
    }

    /// The frame could not be loaded; fall back to placeholder statistics
    pub fn frame_failed(&mut self, now: Instant) {
        self.load = LoadStatus::Failed;
        self.overlay_text = "Error loading image. Using placeholder data for demo.".to_string();
        self.apply_stats(
            StatsUpdate {
                fps: Some(PLACEHOLDER_FPS),
                resolution: Some(PLACEHOLDER_RESOLUTION.to_string()),
                processing_time_ms: Some(PLACEHOLDER_PROCESSING_MS),
                frame_count: None,
            },
            now,
        );
    }

    // ========== View mode ==========

    pub fn toggle_view(&mut self) -> ViewMode {
        self.mode = self.mode.toggled();
        self.overlay_text = match self.mode {
            ViewMode::Canvas => "Canvas rendering mode active",
            ViewMode::Image => "Image rendering mode active",
        }
        .to_string();
        self.mode
    }

    // ========== Timer ==========

    pub fn start(&mut self) {
        self.running = true;
        self.last_tick = None;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.last_tick = None;
    }

    /// Advance the simulation by one tick.
    ///
    /// `wall_ms` is wall-clock time in milliseconds and only drives the
    /// canvas pulse; rates are measured with the monotonic `now`.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Instant, wall_ms: i64, rng: &mut R) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if let Some(previous) = self.last_tick {
            let delta_ms = now.saturating_duration_since(previous).as_secs_f64() * 1000.0;
            if let Some(fps) = rate_from_delta(delta_ms) {
                self.current.fps = fps;
            }
        }
        self.last_tick = Some(now);

        self.frames += 1;
        self.current.processing_time_ms = rng.gen_range(PROCESSING_TIME_MS);
        self.current.frame_count = self.frames;

        if self.frames % self.timing.publish_every == 0 {
            self.publish(now);
            outcome.published = true;
        }

        if self.mode == ViewMode::Canvas && matches!(self.load, LoadStatus::Loaded { .. }) {
            self.overlay_alpha = overlay_alpha(wall_ms);
            outcome.redraw_canvas = true;
        }

        self.expire_highlight(now);
        outcome
    }

    // ========== Display ==========

    /// Merge external statistics and publish them right away
    pub fn apply_stats(&mut self, update: StatsUpdate, now: Instant) {
        self.current.apply(update);
        self.publish(now);
    }

    /// Clear the highlight once its time is up
    pub fn expire_highlight(&mut self, now: Instant) {
        if self.highlight_until.is_some_and(|until| now >= until) {
            self.highlight_until = None;
        }
    }

    pub fn highlight_duration(&self) -> Duration {
        self.timing.highlight
    }

    fn publish(&mut self, now: Instant) {
        self.displayed = self.current.clone();
        self.highlight_until = Some(now + self.timing.highlight);
        log::debug!(
            "Stats: {} fps, {}, {}, frame {}",
            self.displayed.fps,
            self.displayed.resolution,
            self.displayed.processing_time_label(),
            self.displayed.frame_count
        );
    }
}

/// Instantaneous frame rate for the time between two ticks.
/// Returns None for a non-positive delta.
pub fn rate_from_delta(delta_ms: f64) -> Option<u32> {
    if delta_ms > 0.0 {
        Some((1000.0 / delta_ms).round() as u32)
    } else {
        None
    }
}

/// Alpha of the canvas pulse, oscillating between 0.0 and 0.2
pub fn overlay_alpha(wall_ms: i64) -> f32 {
    ((wall_ms as f64 * 0.005).sin() * 0.1 + 0.1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FRAME: Duration = Duration::from_micros(33_330);

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_initial_state() {
        let viewer = ViewerState::default();
        assert_eq!(viewer.mode(), ViewMode::Image);
        assert_eq!(viewer.load_status(), LoadStatus::Idle);
        assert_eq!(viewer.stats(), FrameStats::default());
        assert!(!viewer.is_running());
        assert!(!viewer.is_highlighted());
        assert_eq!(viewer.load_button_label(), "Load Sample Frame");
        assert_eq!(viewer.toggle_button_label(), "Switch to Canvas View");
    }

    #[test]
    fn test_toggle_is_a_two_state_flip() {
        let mut viewer = ViewerState::default();

        assert_eq!(viewer.toggle_view(), ViewMode::Canvas);
        assert_eq!(viewer.overlay_text(), "Canvas rendering mode active");
        assert_eq!(viewer.toggle_button_label(), "Switch to Image View");

        assert_eq!(viewer.toggle_view(), ViewMode::Image);
        assert_eq!(viewer.overlay_text(), "Image rendering mode active");
        assert_eq!(viewer.toggle_button_label(), "Switch to Canvas View");
    }

    #[test]
    fn test_frame_counter_increments_by_one_per_tick() {
        let mut viewer = ViewerState::default();
        let mut rng = rng();
        let start = Instant::now();

        for i in 1..=25u32 {
            viewer.tick(start + FRAME * i, 0, &mut rng);
            assert_eq!(viewer.stats().frame_count, u64::from(i));
        }
    }

    #[test]
    fn test_rate_from_33ms_delta_is_30() {
        assert_eq!(rate_from_delta(33.33), Some(30));
        assert_eq!(rate_from_delta(0.0), None);

        let mut viewer = ViewerState::default();
        let mut rng = rng();
        let start = Instant::now();

        // First tick only primes the clock
        viewer.tick(start, 0, &mut rng);
        assert_eq!(viewer.stats().fps, 0);

        viewer.tick(start + FRAME, 0, &mut rng);
        assert_eq!(viewer.stats().fps, 30);
    }

    #[test]
    fn test_processing_time_stays_in_range() {
        let mut viewer = ViewerState::default();
        let mut rng = rng();
        let start = Instant::now();

        for i in 0..200u32 {
            viewer.tick(start + FRAME * i, 0, &mut rng);
            let ms = viewer.stats().processing_time_ms;
            assert!((10.0..20.0).contains(&ms), "out of range: {ms}");
        }
    }

    #[test]
    fn test_publishes_every_tenth_tick() {
        let mut viewer = ViewerState::default();
        let mut rng = rng();
        let start = Instant::now();

        let published: Vec<u32> = (1..=30u32)
            .filter(|&i| viewer.tick(start + FRAME * i, 0, &mut rng).published)
            .collect();

        assert_eq!(published, vec![10, 20, 30]);
        assert_eq!(viewer.displayed().frame_count, 30);
    }

    #[test]
    fn test_display_lags_between_publishes() {
        let mut viewer = ViewerState::default();
        let mut rng = rng();
        let start = Instant::now();

        for i in 1..=13u32 {
            viewer.tick(start + FRAME * i, 0, &mut rng);
        }

        assert_eq!(viewer.stats().frame_count, 13);
        assert_eq!(viewer.displayed().frame_count, 10);
    }

    #[test]
    fn test_highlight_lasts_half_a_second() {
        let mut viewer = ViewerState::default();
        let now = Instant::now();

        viewer.frame_loaded(1280, 720, now);
        assert!(viewer.is_highlighted());

        viewer.expire_highlight(now + Duration::from_millis(499));
        assert!(viewer.is_highlighted());

        viewer.expire_highlight(now + Duration::from_millis(500));
        assert!(!viewer.is_highlighted());
    }

    #[test]
    fn test_load_success_sets_resolution() {
        let mut viewer = ViewerState::default();
        let now = Instant::now();

        viewer.begin_load();
        assert!(!viewer.can_load());
        assert_eq!(viewer.load_button_label(), "Loading...");
        assert_eq!(viewer.overlay_text(), "Loading sample frame...");

        viewer.frame_loaded(1920, 1080, now);
        assert!(viewer.can_load());
        assert_eq!(viewer.load_button_label(), "Load Sample Frame");
        assert_eq!(viewer.stats().resolution, "1920x1080");
        assert_eq!(viewer.displayed().resolution, "1920x1080");
        assert_eq!(viewer.overlay_text(), "Loaded frame: 1920x1080 pixels");
    }

    #[test]
    fn test_load_failure_uses_placeholder_stats() {
        let mut viewer = ViewerState::default();

        viewer.begin_load();
        viewer.frame_failed(Instant::now());

        let stats = viewer.displayed();
        assert_eq!(stats.resolution, "640x480");
        assert_eq!(stats.fps, 30);
        assert_eq!(stats.processing_time_label(), "16.7ms");
        assert!(viewer.can_load());
        assert_eq!(viewer.load_button_label(), "Retry Loading");
        assert_eq!(
            viewer.overlay_text(),
            "Error loading image. Using placeholder data for demo."
        );
    }

    #[test]
    fn test_custom_load_message() {
        let mut viewer = ViewerState::default();
        viewer.begin_custom_load();
        assert_eq!(viewer.overlay_text(), "Loading custom image...");
        assert_eq!(viewer.load_status(), LoadStatus::Loading);
    }

    #[test]
    fn test_canvas_redraw_needs_canvas_mode_and_frame() {
        let mut viewer = ViewerState::default();
        let mut rng = rng();
        let start = Instant::now();

        assert!(!viewer.tick(start, 0, &mut rng).redraw_canvas);

        viewer.toggle_view();
        assert!(!viewer.tick(start + FRAME, 0, &mut rng).redraw_canvas);

        viewer.frame_loaded(320, 240, start);
        assert!(viewer.tick(start + FRAME * 2, 314, &mut rng).redraw_canvas);
        assert!((viewer.overlay_alpha() - overlay_alpha(314)).abs() < f32::EPSILON);

        viewer.toggle_view();
        assert!(!viewer.tick(start + FRAME * 3, 0, &mut rng).redraw_canvas);
    }

    #[test]
    fn test_overlay_alpha_bounds() {
        for ms in (0..5_000).step_by(7) {
            let alpha = overlay_alpha(ms);
            assert!((0.0..=0.2 + 1e-6).contains(&alpha), "alpha {alpha} at {ms}ms");
        }
        assert!((overlay_alpha(0) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_restart_reprimes_rate_clock() {
        let mut viewer = ViewerState::default();
        let mut rng = rng();
        let start = Instant::now();

        viewer.start();
        viewer.tick(start, 0, &mut rng);
        viewer.tick(start + FRAME, 0, &mut rng);
        assert_eq!(viewer.stats().fps, 30);

        viewer.stop();
        assert!(!viewer.is_running());

        // A long pause must not show up as a 0 fps reading
        viewer.start();
        viewer.tick(start + Duration::from_secs(10), 0, &mut rng);
        assert_eq!(viewer.stats().fps, 30);
        assert_eq!(viewer.stats().frame_count, 3);
    }

    #[test]
    fn test_apply_stats_publishes_immediately() {
        let mut viewer = ViewerState::default();

        viewer.apply_stats(
            StatsUpdate {
                fps: Some(48),
                resolution: Some("1080x2400".to_string()),
                ..StatsUpdate::default()
            },
            Instant::now(),
        );

        assert_eq!(viewer.displayed().fps, 48);
        assert_eq!(viewer.displayed().resolution, "1080x2400");
        assert!(viewer.is_highlighted());
    }

    #[test]
    fn test_applied_frame_count_is_replaced_by_counter() {
        let mut viewer = ViewerState::default();
        let mut rng = rng();
        let start = Instant::now();

        viewer.tick(start, 0, &mut rng);
        viewer.apply_stats(
            StatsUpdate {
                frame_count: Some(1_000),
                ..StatsUpdate::default()
            },
            start,
        );
        viewer.tick(start + FRAME, 0, &mut rng);

        assert_eq!(viewer.stats().frame_count, 2);
    }
}

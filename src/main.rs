use clap::Parser;
use iced::widget::{column, horizontal_rule};
use iced::{time, Element, Subscription, Task, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rfd::FileDialog;
use std::path::PathBuf;
use std::time::Instant;

mod args;
mod config;
mod error;
mod frame;
mod state;
mod ui;

use args::Args;
use config::{AppConfig, Page};
use error::FrameError;
use frame::LoadedFrame;
use state::gallery::{self, Card};
use state::preferences::{Preferences, ThemePreference};
use state::viewer::{Timing, ViewerState};

/// Main application state
struct Showcase {
    config: AppConfig,
    page: Page,
    theme: ThemePreference,
    /// None when the preference database could not be opened
    preferences: Option<Preferences>,
    cards: Vec<Card>,
    viewer: ViewerState,
    /// Decoded frame shown by the viewer
    frame: Option<LoadedFrame>,
    rng: StdRng,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    SelectPage(Page),
    ToggleTheme,
    /// Load the configured sample frame
    LoadSampleFrame,
    /// Pick a frame with the native file dialog
    OpenCustomFrame,
    FrameLoaded(Result<LoadedFrame, FrameError>),
    ToggleView,
    StartTimer,
    StopTimer,
    Tick(Instant),
    HighlightElapsed,
}

impl Showcase {
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        let preferences = open_preferences(&config);
        let theme = preferences
            .as_ref()
            .and_then(|prefs| match prefs.theme() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    log::warn!("Could not read theme preference: {}", e);
                    None
                }
            })
            .unwrap_or_default();

        let mut viewer = ViewerState::new(Timing {
            publish_every: config.publish_every,
            highlight: config.highlight(),
        });
        viewer.start();

        let cards = gallery::cards(&gallery::SHOWCASE, &config.asset_dir);
        log::info!(
            "Showcase ready: {} cards, {} theme, assets in {}",
            cards.len(),
            theme.as_str(),
            config.asset_dir.display()
        );

        let mut app = Showcase {
            page: config.start_page,
            theme,
            preferences,
            cards,
            viewer,
            frame: None,
            rng: StdRng::from_entropy(),
            config,
        };

        let task = app.load_sample_frame();
        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectPage(page) => {
                log::info!("Page: {:?}", page);
                self.page = page;
                Task::none()
            }
            Message::ToggleTheme => {
                self.theme = self.theme.toggled();
                log::info!("Theme: {}", self.theme.as_str());

                if let Some(prefs) = &self.preferences {
                    if let Err(e) = prefs.set_theme(self.theme) {
                        log::warn!("Could not save theme preference: {}", e);
                    }
                }
                Task::none()
            }
            Message::LoadSampleFrame => self.load_sample_frame(),
            Message::OpenCustomFrame => {
                let picked = FileDialog::new()
                    .set_title("Open Frame")
                    .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "webp"])
                    .pick_file();

                match picked {
                    Some(path) => {
                        self.viewer.begin_custom_load();
                        load_task(path)
                    }
                    None => Task::none(),
                }
            }
            Message::FrameLoaded(Ok(frame)) => {
                log::info!(
                    "Loaded frame {} ({}x{})",
                    frame.path.display(),
                    frame.width,
                    frame.height
                );
                self.viewer.frame_loaded(frame.width, frame.height, Instant::now());
                self.frame = Some(frame);
                self.highlight_task()
            }
            Message::FrameLoaded(Err(e)) => {
                log::warn!("Frame failed to load, using placeholder stats: {}", e);
                self.viewer.frame_failed(Instant::now());
                self.frame = None;
                self.highlight_task()
            }
            Message::ToggleView => {
                let mode = self.viewer.toggle_view();
                log::info!("View mode: {:?}", mode);
                Task::none()
            }
            Message::StartTimer => {
                log::info!("Frame simulation started");
                self.viewer.start();
                Task::none()
            }
            Message::StopTimer => {
                self.viewer.stop();
                let stats = self.viewer.stats();
                log::info!(
                    "Frame simulation stopped after {} frames ({} fps, {})",
                    stats.frame_count,
                    stats.fps,
                    stats.processing_time_label()
                );
                Task::none()
            }
            Message::Tick(now) => {
                let wall_ms = chrono::Utc::now().timestamp_millis();
                let outcome = self.viewer.tick(now, wall_ms, &mut self.rng);
                if outcome.published {
                    self.highlight_task()
                } else {
                    Task::none()
                }
            }
            Message::HighlightElapsed => {
                self.viewer.expire_highlight(Instant::now());
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let body = match self.page {
            Page::Gallery => ui::gallery::view(&self.cards),
            Page::Viewer => ui::viewer::view(&self.viewer, self.frame.as_ref()),
        };

        column![ui::header(self.page, self.theme), horizontal_rule(1), body].into()
    }

    fn theme(&self) -> Theme {
        ui::theme::to_iced(self.theme)
    }

    /// The frame timer only exists while the simulation runs
    fn subscription(&self) -> Subscription<Message> {
        if self.viewer.is_running() {
            time::every(self.config.tick_interval()).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn load_sample_frame(&mut self) -> Task<Message> {
        self.viewer.begin_load();
        load_task(self.config.sample_frame_path())
    }

    /// Clears the stats highlight once it has run its course
    fn highlight_task(&self) -> Task<Message> {
        let duration = self.viewer.highlight_duration();
        Task::perform(
            async move { tokio::time::sleep(duration).await },
            |_| Message::HighlightElapsed,
        )
    }
}

fn load_task(path: PathBuf) -> Task<Message> {
    Task::perform(frame::load_frame(path), Message::FrameLoaded)
}

/// Open the preference store; the app still runs without one
fn open_preferences(config: &AppConfig) -> Option<Preferences> {
    let path = match &config.database_path {
        Some(path) => path.clone(),
        None => match Preferences::default_path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("{}; theme will not be saved", e);
                return None;
            }
        },
    };

    match Preferences::open(&path) {
        Ok(prefs) => Some(prefs),
        Err(e) => {
            log::warn!("{}; theme will not be saved", e);
            None
        }
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match AppConfig::load(args.config.as_deref()) {
        Ok(config) => config.with_args(&args),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    };

    iced::application("Canny Edge Detection Showcase", Showcase::update, Showcase::view)
        .theme(Showcase::theme)
        .subscription(Showcase::subscription)
        .centered()
        .run_with(move || Showcase::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::viewer::ViewMode;

    fn test_app(dir: &tempfile::TempDir) -> Showcase {
        let config = AppConfig {
            asset_dir: dir.path().join("assets"),
            database_path: Some(dir.path().join("prefs.db")),
            ..AppConfig::default()
        };
        let (app, _) = Showcase::new(config);
        app
    }

    #[test]
    fn test_startup_state() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);

        assert_eq!(app.page, Page::Gallery);
        assert_eq!(app.cards.len(), 4);
        assert_eq!(app.theme, ThemePreference::Dark);
        assert!(app.viewer.is_running());
        assert!(!app.viewer.can_load());
    }

    #[test]
    fn test_theme_toggle_survives_restart() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut app = test_app(&dir);
            let _ = app.update(Message::ToggleTheme);
            assert_eq!(app.theme, ThemePreference::Light);
        }

        let app = test_app(&dir);
        assert_eq!(app.theme, ThemePreference::Light);
    }

    #[test]
    fn test_failed_load_message() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        let missing = dir.path().join("assets").join("sample-frame.jpg");
        let _ = app.update(Message::FrameLoaded(Err(FrameError::NotFound(missing))));

        assert!(app.frame.is_none());
        assert_eq!(app.viewer.displayed().resolution, "640x480");
        assert_eq!(app.viewer.displayed().fps, 30);
        assert_eq!(app.viewer.load_button_label(), "Retry Loading");
    }

    #[test]
    fn test_stop_removes_timer() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        let _ = app.update(Message::StopTimer);
        assert!(!app.viewer.is_running());

        let _ = app.update(Message::StartTimer);
        assert!(app.viewer.is_running());
    }

    #[test]
    fn test_toggle_view_and_page() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        let _ = app.update(Message::SelectPage(Page::Viewer));
        let _ = app.update(Message::ToggleView);
        assert_eq!(app.page, Page::Viewer);
        assert_eq!(app.viewer.mode(), ViewMode::Canvas);
    }
}

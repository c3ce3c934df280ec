/// Frame loading for the live viewer
///
/// The viewer shows one still frame; this module decodes it in the
/// background and hands back a display handle.

pub mod loader;

pub use loader::{load_frame, LoadedFrame};

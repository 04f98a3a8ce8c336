//! UI screens.

mod app;
mod progress_screen;

pub use app::App;
pub use progress_screen::{ProgressScreen, ProgressScreenState, ScreenAction};

pub mod feedback;
pub mod progress;
pub mod table;

pub use feedback::render_feedback;
pub use progress::ProgressSpinner;
pub use table::TableDisplay;

/// Color output is used only on a real terminal and never when the user
/// set NO_COLOR
pub fn colors_enabled() -> bool {
    atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
}

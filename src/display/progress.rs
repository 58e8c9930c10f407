//! Progress display for the in-flight webhook request

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

// Constants for display configuration
const SPINNER_UPDATE_INTERVAL_MS: u64 = 100;
const CLEAR_LINE_WIDTH: usize = 100;

/// Simple spinner shown while the submission is in flight. Does nothing
/// when stdout is not a terminal, so piped output stays clean.
pub struct ProgressSpinner {
    message: String,
    running: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ProgressSpinner {
    /// Create new progress spinner with message
    pub fn new(message: String) -> Self {
        let running = Arc::new(AtomicBool::new(false));
        Self {
            message,
            running,
            handle: None,
        }
    }

    /// Start spinner. No-op on a non-TTY stdout.
    pub fn start(&mut self) {
        if !atty::is(atty::Stream::Stdout) {
            return;
        }

        self.running.store(true, Ordering::Relaxed);
        let running = Arc::clone(&self.running);
        let message = self.message.clone();

        let handle = thread::spawn(move || {
            let spinner_chars = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut index = 0;

            while running.load(Ordering::Relaxed) {
                print!("\r{} {}", spinner_chars[index], message);
                let _ = io::stdout().flush(); // Ignore flush errors to continue operation

                index = (index + 1) % spinner_chars.len();
                thread::sleep(Duration::from_millis(SPINNER_UPDATE_INTERVAL_MS));
            }

            // Clear line properly for emoji support
            print!("\r{:<width$}\r", "", width = CLEAR_LINE_WIDTH);
            let _ = io::stdout().flush(); // Ignore flush errors to continue operation
        });

        self.handle = Some(handle);
    }

    /// Stop spinner and display completion message
    pub fn stop(&mut self, completion_message: Option<&str>) {
        self.running.store(false, Ordering::Relaxed);

        if let Some(handle) = self.handle.take() {
            let _ = handle.join(); // Ignore thread join errors
        }

        if let Some(msg) = completion_message {
            // Add space before emoji to prevent terminal clipping
            println!(" {}", msg);
            let _ = io::stdout().flush(); // Ignore flush errors
        }
    }
}

impl Drop for ProgressSpinner {
    fn drop(&mut self) {
        self.stop(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_stop_without_start_is_safe() {
        let mut spinner = ProgressSpinner::new("Sending...".to_string());
        spinner.stop(None);
        assert!(spinner.handle.is_none());
    }

    #[test]
    fn test_spinner_drop_is_safe() {
        let spinner = ProgressSpinner::new("Sending...".to_string());
        drop(spinner);
    }

    #[test]
    fn test_spinner_does_not_spawn_without_tty() {
        // Test harness stdout is captured, so start() must be a no-op
        let mut spinner = ProgressSpinner::new("Sending...".to_string());
        spinner.start();
        assert!(spinner.handle.is_none());
    }
}

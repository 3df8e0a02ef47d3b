//! Progress narration for module generation.
//! The core notifies an observer after each step; presentation lives in
//! the observer implementations, never in the core.

/// Observer notified as a generation run progresses.
pub trait Reporter {
    /// Called when a generation phase begins
    fn phase(&self, title: &str, detail: &str);
    /// Called after each completed step inside a phase
    fn step(&self, message: &str);
}

/// Prints phases and steps to stdout.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn phase(&self, title: &str, detail: &str) {
        println!("\nPHASE: {}", title);
        println!("  {}", detail);
    }

    fn step(&self, message: &str) {
        println!("  \u{2713} {}", message);
    }
}

/// Discards all notifications. Used by tests and embedders that want the
/// core without console output.
pub struct QuietReporter;

impl Reporter for QuietReporter {
    fn phase(&self, _title: &str, _detail: &str) {}
    fn step(&self, _message: &str) {}
}

/// The phases of a generation run, in execution order.
pub fn generation_phases(project_name: &str) -> Vec<(String, String)> {
    vec![
        (
            "Configuration Validation".to_string(),
            "Validating module parameters and requirements.".to_string(),
        ),
        (
            "Infrastructure Setup".to_string(),
            format!("Initializing project structure for '{}'.", project_name),
        ),
        (
            "Source Generation".to_string(),
            "Processing templates and generating source files.".to_string(),
        ),
        (
            "Finalization".to_string(),
            "Configuring automation scripts and build hooks.".to_string(),
        ),
    ]
}

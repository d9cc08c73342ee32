use std::io::{self, Write};

/// Output handler for consistent formatting
pub struct Output {
    quiet: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// An output handler that prints nothing
    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    /// Print a status message (action: target)
    pub fn status(&self, action: &str, target: &str) {
        if !self.quiet {
            // Right-align action in 12 chars, like cargo does
            eprintln!("{:>12} {}", action, target);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        self.status("Done", message);
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        self.status("Warning", message);
    }

    /// Print a recoverable error; the run continues
    pub fn error(&self, err: &dyn std::error::Error) {
        if self.quiet {
            return;
        }
        eprintln!("{:>12} {}", "Error", err);
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("{:>12} caused by: {}", "", cause);
            source = cause.source();
        }
    }

    /// Flush stderr
    pub fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Print a fatal error message to stderr
pub fn print_error(err: &anyhow::Error) {
    eprintln!("error: {}", err);

    // Print cause chain
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }
}

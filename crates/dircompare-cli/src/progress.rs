//! Console output while matched files are compared

use dialoguer::console::Term;
use dircompare_core::{FileOutcome, ProgressObserver, RelativePath};

/// Banner printed once content comparison begins
pub const COMPARING_BANNER: &str = "\n🔍 Comparing file contents...\n";

/// Redraws a single `Comparing: n/total` line on stderr
pub struct TermProgress {
    term: Term,
    total: usize,
    done: usize,
}

impl TermProgress {
    /// Progress on stderr, if stderr is a terminal
    #[must_use]
    pub fn stderr() -> Option<Self> {
        let term = Term::stderr();
        term.is_term().then_some(Self {
            term,
            total: 0,
            done: 0,
        })
    }

    fn draw(&self) {
        // Display failures must not affect the comparison
        let _ = self.term.clear_line();
        let _ = self
            .term
            .write_str(&format!("Comparing: {}/{} files", self.done, self.total));
    }
}

impl ProgressObserver for TermProgress {
    fn on_start(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.draw();
    }

    fn on_file(&mut self, _path: &RelativePath, _outcome: &FileOutcome) {
        self.done += 1;
        self.draw();
    }

    fn on_finish(&mut self) {
        let _ = self.term.write_line("");
    }
}

/// Prints the banner on stdout, then forwards to an optional progress line
pub struct ConsoleObserver {
    progress: Option<TermProgress>,
}

impl ConsoleObserver {
    /// Observer drawing a progress line only when `show_progress` is set
    /// and stderr is a terminal
    #[must_use]
    pub fn new(show_progress: bool) -> Self {
        Self {
            progress: if show_progress { TermProgress::stderr() } else { None },
        }
    }
}

impl ProgressObserver for ConsoleObserver {
    fn on_start(&mut self, total: usize) {
        println!("{COMPARING_BANNER}");
        if let Some(progress) = &mut self.progress {
            progress.on_start(total);
        }
    }

    fn on_file(&mut self, path: &RelativePath, outcome: &FileOutcome) {
        if let Some(progress) = &mut self.progress {
            progress.on_file(path, outcome);
        }
    }

    fn on_finish(&mut self) {
        if let Some(progress) = &mut self.progress {
            progress.on_finish();
        }
    }
}

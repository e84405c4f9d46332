//! Plain terminal presenter: each view renders as a titled section on the
//! writer it was built with (stdout in the binary, a buffer in tests).

use std::io::{self, Write};

use crate::optimize_client::OptimizationResult;
use crate::submission::validate::ValidationError;
use crate::view::{
    render_list, Presenter, NO_CHANGES_PLACEHOLDER, NO_RECOMMENDATIONS_PLACEHOLDER,
};

pub struct TerminalPresenter<W: Write = io::Stdout> {
    out: W,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> Presenter for TerminalPresenter<W> {
    fn show_loading(&mut self) {
        let _ = writeln!(self.out, "Optimizing your resume...");
    }

    fn show_results(&mut self, result: &OptimizationResult) {
        let _ = writeln!(self.out, "\nATS Compatibility Score: {}/100", result.ats_score);
        let _ = writeln!(self.out, "\nOptimized Resume\n----------------");
        let _ = writeln!(self.out, "{}", result.optimized_resume);
        let _ = writeln!(self.out, "\nChanges Made\n------------");
        let _ = writeln!(
            self.out,
            "{}",
            render_list(&result.changes_summary, NO_CHANGES_PLACEHOLDER)
        );
        let _ = writeln!(self.out, "\nRecommendations\n---------------");
        let _ = writeln!(
            self.out,
            "{}",
            render_list(&result.recommendations, NO_RECOMMENDATIONS_PLACEHOLDER)
        );
        if let Some(url) = &result.download_url {
            let _ = writeln!(self.out, "\nDownload: {url}");
        }
    }

    fn show_error(&mut self, message: &str) {
        let _ = writeln!(self.out, "\nError: {message}");
    }

    fn show_validation_error(&mut self, error: &ValidationError) {
        let _ = writeln!(self.out, "{error}");
    }

    fn reset(&mut self) {
        let _ = writeln!(self.out, "\nReady for a new submission.");
    }
}

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub(crate) struct ProgressBarBuilder {
    style_template: &'static str,
    message: String,
    enable_tick: bool,
}

impl ProgressBarBuilder {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            style_template: "{spinner:.green} [{elapsed_precise}] {msg} {pos} records ({per_sec})",
            message: message.into(),
            enable_tick: false,
        }
    }

    pub(crate) fn with_tick(mut self) -> Self {
        self.enable_tick = true;
        self
    }

    /// Spinners draw to stderr, so they never mix with table output and stay
    /// silent when stderr is not a terminal.
    pub(crate) fn build(self) -> Result<ProgressBar> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template(self.style_template)?);
        pb.set_message(self.message);

        if self.enable_tick {
            pb.enable_steady_tick(Duration::from_millis(200));
        }

        Ok(pb)
    }
}

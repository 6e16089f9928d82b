//! A spinner shown while a step without measurable progress runs.

use std::{borrow::Cow, time::Duration};

const TICK_INTERVAL: Duration = Duration::from_millis(80);

pub struct Spinner {
    inner: indicatif::ProgressBar,
}

impl Spinner {
    /// Starts spinning with `message` next to the spinner.
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded template is invalid.
    pub fn start(message: impl Into<Cow<'static, str>>) -> Self {
        let inner = indicatif::ProgressBar::new_spinner();
        inner.set_style(
            indicatif::ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("the template is valid"),
        );
        inner.set_message(message);
        inner.enable_steady_tick(TICK_INTERVAL);
        Self { inner }
    }

    /// Stops the spinner and leaves `message` in its place.
    pub fn finish(self, message: impl Into<Cow<'static, str>>) {
        self.inner.finish_with_message(message);
    }

    /// Stops the spinner and removes it from the terminal.
    pub fn abandon(self) { self.inner.finish_and_clear(); }
}

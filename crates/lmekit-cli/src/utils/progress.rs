use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// A stderr spinner shown while an external toolkit call runs.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn start(message: impl Into<String>, hidden: bool) -> Self {
        let pb = ProgressBar::new_spinner().with_message(message.into());
        match spinner_style() {
            Some(style) => pb.set_style(style),
            None => warn!("Spinner style template rejected; using the default style."),
        }
        if hidden {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        } else {
            pb.set_draw_target(ProgressDrawTarget::stderr());
            pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        }
        Self { pb }
    }

    pub fn finish(self, message: impl Into<String>) {
        self.pb.disable_steady_tick();
        self.pb.finish_with_message(message.into());
    }

    pub fn fail(self) {
        self.pb.disable_steady_tick();
        self.pb.finish_and_clear();
    }
}

fn spinner_style() -> Option<ProgressStyle> {
    ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]").ok()
}

/// Runs `task` behind a spinner, replacing it with `done` on success.
pub fn with_spinner<T, E>(
    message: &str,
    done: &str,
    hidden: bool,
    task: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    let spinner = Spinner::start(message, hidden);
    let result = task();
    match &result {
        Ok(_) => spinner.finish(done),
        Err(_) => spinner.fail(),
    }
    result
}

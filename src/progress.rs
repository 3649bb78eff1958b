//! Progress bar display for downloads

use std::io::Write;

use indicatif::{ProgressBar, ProgressBarIter, ProgressDrawTarget, ProgressStyle};

/// Byte progress for a single download
pub struct DownloadProgress {
    pb: ProgressBar,
}

impl DownloadProgress {
    /// Create a progress bar for `name`; hidden when `visible` is false or stderr is not a terminal
    pub fn new(total_bytes: Option<u64>, name: &str, visible: bool) -> Self {
        let pb = match total_bytes {
            Some(total) => {
                let style = ProgressStyle::default_bar()
                    .template("[{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-");
                let pb = ProgressBar::new(total);
                pb.set_style(style);
                pb
            }
            None => {
                let style = ProgressStyle::default_spinner()
                    .template("{spinner} {bytes} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner());
                let pb = ProgressBar::new_spinner();
                pb.set_style(style);
                pb
            }
        };

        if !visible {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        }
        pb.set_message(truncate_name(name));

        Self { pb }
    }

    /// Wrap a writer so every byte written advances the bar
    pub fn wrap<W: Write>(&self, writer: W) -> ProgressBarIter<W> {
        self.pb.wrap_write(writer)
    }

    pub fn finish(&self) {
        self.pb.finish();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.pb.abandon();
    }
}

fn truncate_name(name: &str) -> String {
    let count = name.chars().count();
    if count > 50 {
        let tail: String = name.chars().skip(count - 47).collect();
        format!("...{}", tail)
    } else {
        name.to_string()
    }
}

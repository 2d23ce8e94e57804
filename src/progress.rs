use serde::{Deserialize, Serialize};
use std::io::Write;

/// Snapshot of how far one player has got through the prompt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub id: u64,
    pub progress: f64,
}

/// Where progress reports go. The multiplayer server lives behind this.
pub trait ProgressSink {
    fn send(&mut self, report: &ProgressReport);
}

impl<F: FnMut(&ProgressReport)> ProgressSink for F {
    fn send(&mut self, report: &ProgressReport) {
        self(report)
    }
}

/// Sink used when multiplayer is turned off
#[derive(Debug, Default, Clone, Copy)]
pub struct Disabled;

impl ProgressSink for Disabled {
    fn send(&mut self, report: &ProgressReport) {
        log::trace!("multiplayer disabled, dropping {report:?}");
    }
}

/// Writes each report as one JSON object per line
#[derive(Debug)]
pub struct JsonLines<W: Write> {
    out: W,
}

impl<W: Write> JsonLines<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressSink for JsonLines<W> {
    fn send(&mut self, report: &ProgressReport) {
        let written = serde_json::to_writer(&mut self.out, report)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(self.out))
            .and_then(|_| self.out.flush());
        if let Err(e) = written {
            log::warn!("failed to send progress report: {e}");
        }
    }
}

/// Fraction of `prompt` typed correctly before the first mistake, sent to
/// `sink` exactly once and returned.
pub fn report_progress<S: ProgressSink + ?Sized>(
    typed: &str,
    prompt: &str,
    id: u64,
    sink: &mut S,
) -> f64 {
    let prompt_len = prompt.chars().count();
    let correct = typed
        .chars()
        .zip(prompt.chars())
        .take_while(|(t, p)| t == p)
        .count();

    let progress = if prompt_len == 0 {
        0.0
    } else {
        correct as f64 / prompt_len as f64
    };

    let report = ProgressReport { id, progress };
    log::debug!("reporting {report:?}");
    sink.send(&report);
    progress
}

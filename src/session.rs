use crate::autocorrect::{autocorrect_text, DiffFunction, WordList};
use crate::error::Result;
use crate::paragraphs::{about, choose, ParagraphSet};
use crate::progress::{report_progress, ProgressSink};
use crate::results_log::{ResultsLog, RoundResult};
use crate::runtime::Clock;
use crate::scoring::{accuracy, wpm};
use chrono::Local;
use crossterm::style::Stylize;
use std::io::{BufRead, Write};

/// Autocorrect applied to typed lines before scoring
#[derive(Debug, Clone)]
pub struct AutocorrectOptions {
    pub words: WordList,
    pub diff: DiffFunction,
    pub limit: i64,
}

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub topics: Vec<String>,
    pub autocorrect: Option<AutocorrectOptions>,
    pub enable_multiplayer: bool,
    pub player_id: u64,
    pub styled: bool,
}

/// Interactive command-line typing test
pub struct TypingSession<'a, C: Clock, S: ProgressSink> {
    paragraphs: &'a ParagraphSet,
    options: SessionOptions,
    clock: C,
    sink: S,
    results_log: Option<ResultsLog>,
}

impl<'a, C: Clock, S: ProgressSink> TypingSession<'a, C, S> {
    pub fn new(paragraphs: &'a ParagraphSet, options: SessionOptions, clock: C, sink: S) -> Self {
        Self {
            paragraphs,
            options,
            clock,
            sink,
            results_log: None,
        }
    }

    pub fn with_results_log(mut self, log: ResultsLog) -> Self {
        self.results_log = Some(log);
        self
    }

    /// Run rounds until the paragraphs run out, the user enters an empty
    /// line, or types `q`. Returns the result of every scored round.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<Vec<RoundResult>> {
        let select: Box<dyn Fn(&str) -> bool> = if self.options.topics.is_empty() {
            Box::new(|_: &str| true)
        } else {
            Box::new(about(self.options.topics.clone())?)
        };

        let mut results = Vec::new();
        let mut k = 0;
        loop {
            let reference = choose(self.paragraphs.as_slice(), &select, k);
            if reference.is_empty() {
                writeln!(
                    out,
                    "No more paragraphs about {:?} are available.",
                    self.options.topics
                )?;
                return Ok(results);
            }

            writeln!(out, "Type the following paragraph and then press enter/return.")?;
            writeln!(
                out,
                "If you only type part of it, you will be scored only on that part.\n"
            )?;
            writeln!(out, "{}\n", self.emphasis(&reference))?;
            out.flush()?;

            let start = self.clock.now();
            let typed = match read_line(&mut input)? {
                Some(line) if !line.is_empty() => line,
                _ => {
                    writeln!(out, "Goodbye.")?;
                    return Ok(results);
                }
            };
            let elapsed = self.clock.elapsed_secs(start);
            writeln!(out)?;

            let typed = match &self.options.autocorrect {
                Some(ac) => {
                    let corrected = autocorrect_text(&typed, &ac.words, ac.diff, ac.limit);
                    if corrected != typed {
                        writeln!(out, "Autocorrected:    {corrected}")?;
                    }
                    corrected
                }
                None => typed,
            };

            if self.options.enable_multiplayer {
                report_progress(&typed, &reference, self.options.player_id, &mut self.sink);
            }

            let result = RoundResult {
                date: Local::now(),
                topics: self.options.topics.join(" "),
                elapsed_secs: elapsed,
                wpm: wpm(&typed, elapsed)?,
                accuracy: accuracy(&typed, &reference),
            };
            log::info!(
                "round {k}: {:.2} wpm, {:.2}% accuracy in {:.2}s",
                result.wpm,
                result.accuracy,
                result.elapsed_secs
            );

            writeln!(out, "{}", self.emphasis("Nice work!"))?;
            writeln!(out, "Words per minute: {:.2}", result.wpm)?;
            writeln!(out, "Accuracy:         {:.2}", result.accuracy)?;

            if let Some(log) = &self.results_log {
                if let Err(e) = log.append(&result) {
                    log::warn!("could not record results in {}: {e}", log.path().display());
                }
            }
            results.push(result);

            writeln!(
                out,
                "\nPress enter/return for the next paragraph or type q to quit."
            )?;
            out.flush()?;
            match read_line(&mut input)? {
                Some(line) if line.trim() == "q" => return Ok(results),
                None => return Ok(results),
                _ => {}
            }
            k += 1;
        }
    }

    fn emphasis(&self, text: &str) -> String {
        if self.options.styled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Next line without its terminator, or `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

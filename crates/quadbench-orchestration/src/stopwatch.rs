//! Wall-clock stopwatch with a progress-reporting parallel runner.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use rayon::ThreadPool;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use quadbench_core::constants::DEFAULT_LINE_WIDTH;
use quadbench_core::progress::{CompletionCounter, ProgressSchedule};
use quadbench_core::progress_bar::ProgressBar;
use quadbench_core::QuadError;

use crate::comparison::Comparison;

/// What drives the progress bar during [`Stopwatch::run_with_progress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressMode {
    /// Fixed animation, independent of how far the work has got.
    #[default]
    Fixed,
    /// Share of finished repetitions, polled once per tick.
    Completion,
}

/// Presentation and dispatch settings for one timed run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Label drawn in front of the bar.
    pub label: String,
    /// Total width of the progress line.
    pub line_width: usize,
    /// Fill glyph, `None` for the default.
    pub fill: Option<char>,
    /// Tick cadence (and increments in [`ProgressMode::Fixed`]).
    pub schedule: ProgressSchedule,
    /// Worker count, `None` for the global rayon pool.
    pub threads: Option<usize>,
    pub mode: ProgressMode,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            label: String::new(),
            line_width: DEFAULT_LINE_WIDTH,
            fill: None,
            schedule: ProgressSchedule::default(),
            threads: None,
            mode: ProgressMode::default(),
        }
    }
}

impl RunOptions {
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Measures elapsed time between [`start`](Self::start) and [`stop`](Self::stop).
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    begin: Option<Instant>,
    end: Option<Instant>,
    elapsed: Option<Duration>,
}

impl Stopwatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A stopwatch holding an already known measurement.
    #[must_use]
    pub fn from_elapsed(elapsed: Duration) -> Self {
        Self {
            begin: None,
            end: None,
            elapsed: Some(elapsed),
        }
    }

    /// Record the start instant. Discards any previous measurement.
    pub fn start(&mut self) -> &mut Self {
        self.begin = Some(Instant::now());
        self.end = None;
        self.elapsed = None;
        self
    }

    /// Record the end instant and derive the elapsed time.
    pub fn stop(&mut self) -> Result<Duration, QuadError> {
        let begin = self.begin.ok_or(QuadError::StopBeforeStart)?;
        let end = Instant::now();
        let elapsed = end.saturating_duration_since(begin);
        self.end = Some(end);
        self.elapsed = Some(elapsed);
        Ok(elapsed)
    }

    /// Whether `start` was called without a matching `stop`.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.begin.is_some() && self.end.is_none()
    }

    /// The last completed measurement.
    pub fn result(&self) -> Result<Duration, QuadError> {
        self.elapsed.ok_or(QuadError::NotMeasured)
    }

    /// Time `repetitions` calls of `work` while animating a bar on stderr.
    pub fn run_with_progress<F>(&mut self, work: F, repetitions: u64) -> Result<&mut Self, QuadError>
    where
        F: Fn() + Sync + Send,
    {
        self.run_with_progress_to(io::stderr(), &RunOptions::default(), work, repetitions)
    }

    /// Time `repetitions` calls of `work`, dispatched on a rayon pool, while
    /// the calling thread drives a progress bar on `sink`.
    ///
    /// Timing stops once both the progress schedule and the dispatch have
    /// completed. The bar is finalized on every exit path.
    pub fn run_with_progress_to<W, F>(
        &mut self,
        sink: W,
        options: &RunOptions,
        work: F,
        repetitions: u64,
    ) -> Result<&mut Self, QuadError>
    where
        W: Write,
        F: Fn() + Sync + Send,
    {
        let pool = build_pool(options.threads)?;
        let counter = CompletionCounter::new(repetitions);

        info!(
            label = %options.label,
            repetitions,
            mode = ?options.mode,
            "timed run started"
        );
        let mut bar = ProgressBar::new(sink, options.line_width, &options.label, options.fill)?;
        self.start();

        let (driven, dispatched) = thread::scope(|scope| {
            let worker = scope.spawn(|| {
                let dispatch = || {
                    (0..repetitions).into_par_iter().for_each(|_| {
                        work();
                        counter.complete_one();
                    });
                };
                match &pool {
                    Some(pool) => pool.install(dispatch),
                    None => dispatch(),
                }
            });

            let driven = match options.mode {
                ProgressMode::Fixed => drive_schedule(&mut bar, options.schedule),
                ProgressMode::Completion => {
                    drive_completion(&mut bar, &counter, options.schedule.tick(), || {
                        worker.is_finished()
                    })
                }
            };
            (driven, worker.join())
        });

        let stopped = self.stop();
        let finished = bar.finish();

        let outcome = match (dispatched, driven, finished) {
            (Err(_), _, _) => Err(QuadError::WorkerPanicked),
            (Ok(()), Err(e), _) | (Ok(()), Ok(()), Err(e)) => Err(QuadError::Io(e)),
            (Ok(()), Ok(()), Ok(_)) => stopped,
        };
        // A failed run leaves no measurement behind.
        let elapsed = match outcome {
            Ok(elapsed) => elapsed,
            Err(e) => {
                self.reset();
                return Err(e);
            }
        };

        info!(
            label = %options.label,
            repetitions,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "timed run finished"
        );
        Ok(self)
    }

    /// Compare this measurement against `other`'s.
    ///
    /// The verdict is phrased from this stopwatch's point of view.
    pub fn compare(
        &self,
        label: &str,
        other_label: &str,
        other: &Stopwatch,
    ) -> Result<Comparison, QuadError> {
        Ok(Comparison::new(label, other_label, self.result()?, other.result()?))
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

fn build_pool(threads: Option<usize>) -> Result<Option<ThreadPool>, QuadError> {
    let Some(threads) = threads else {
        return Ok(None);
    };
    debug!(threads, "building dedicated worker pool");
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map(Some)
        .map_err(|e| QuadError::ThreadPool(e.to_string()))
}

// Render every fraction of the schedule, sleeping one tick between frames.
fn drive_schedule<W: Write>(bar: &mut ProgressBar<W>, schedule: ProgressSchedule) -> io::Result<()> {
    let mut fractions = schedule.fractions().peekable();
    while let Some(fraction) = fractions.next() {
        bar.render(fraction)?;
        if fractions.peek().is_some() {
            thread::sleep(schedule.tick());
        }
    }
    Ok(())
}

// Render the completed share once per tick until the dispatch ends.
fn drive_completion<W, D>(
    bar: &mut ProgressBar<W>,
    counter: &CompletionCounter,
    tick: Duration,
    dispatch_finished: D,
) -> io::Result<()>
where
    W: Write,
    D: Fn() -> bool,
{
    loop {
        bar.render(counter.fraction())?;
        if counter.is_done() || dispatch_finished() {
            return Ok(());
        }
        thread::sleep(tick);
    }
}

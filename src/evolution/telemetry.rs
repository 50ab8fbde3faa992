//! A module which provides the logic to collect metrics about search execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/evolution/telemetry_test.rs"]
mod telemetry_test;

use crate::utils::{InfoLogger, Timer};
use std::time::Duration;

/// Durations of the phases of a single generation. Phases which a strategy does not
/// have stay zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhaseTimings {
    /// Survivor copy phase.
    pub copy: Duration,
    /// Pairwise crossing phase.
    pub cross: Duration,
    /// Mutation phase.
    pub mutate: Duration,
    /// Fitness rescoring phase.
    pub rescore: Duration,
    /// Ranking sort phase.
    pub sort: Duration,
}

/// Represents information about a single generation.
pub struct TelemetryGeneration {
    /// Generation sequence number.
    pub number: usize,
    /// Seconds since the search started.
    pub timestamp: f64,
    /// Best fitness score at the end of the generation.
    pub best_score: u64,
    /// Phase durations of the generation.
    pub timings: PhaseTimings,
}

/// Encapsulates different measurements regarding search execution.
pub struct TelemetryMetrics {
    /// Search duration in milliseconds.
    pub duration: u128,
    /// Total amount of generations.
    pub generations: usize,
    /// Speed: generations per second.
    pub speed: f64,
    /// Progress of the search.
    pub evolution: Vec<TelemetryGeneration>,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often the best score is logged.
        log_best: usize,
    },
    /// Only metrics collection.
    OnlyMetrics {
        /// Specifies how often generations are tracked.
        track_every: usize,
    },
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often the best score is logged.
        log_best: usize,
        /// Specifies how often generations are tracked.
        track_every: usize,
    },
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    mode: TelemetryMode,
    time: Timer,
    generations: usize,
    evolution: Vec<TelemetryGeneration>,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode, time: Timer::start(), generations: 0, evolution: vec![] }
    }

    /// Reports statistics of a completed generation.
    pub fn on_generation(&mut self, number: usize, best_score: u64, timings: PhaseTimings) {
        self.generations = number;

        let (log_best, track_every) = match &self.mode {
            TelemetryMode::None => (None, None),
            TelemetryMode::OnlyLogging { log_best, .. } => (Some(*log_best), None),
            TelemetryMode::OnlyMetrics { track_every } => (None, Some(*track_every)),
            TelemetryMode::All { log_best, track_every, .. } => (Some(*log_best), Some(*track_every)),
        };

        if log_best.is_some_and(|log_best| number % log_best == 0) {
            self.log(
                format!(
                    "[{}s] generation {}: best score {}, copy/cross/mutate/rescore/sort: {}/{}/{}/{}/{}ms",
                    self.time.elapsed_secs(),
                    number,
                    best_score,
                    timings.copy.as_millis(),
                    timings.cross.as_millis(),
                    timings.mutate.as_millis(),
                    timings.rescore.as_millis(),
                    timings.sort.as_millis(),
                )
                .as_str(),
            );
        }

        if track_every.is_some_and(|track_every| number % track_every == 0) {
            self.evolution.push(TelemetryGeneration {
                number,
                timestamp: self.time.elapsed_secs_as_f64(),
                best_score,
                timings,
            });
        }
    }

    /// Returns collected metrics, if metrics collection is enabled.
    pub fn take_metrics(&mut self) -> Option<TelemetryMetrics> {
        match &self.mode {
            TelemetryMode::OnlyMetrics { .. } | TelemetryMode::All { .. } => {
                let elapsed = self.time.elapsed_secs_as_f64();
                let speed = self.generations as f64 / elapsed.max(f64::EPSILON);

                Some(TelemetryMetrics {
                    duration: self.time.elapsed_millis(),
                    generations: self.generations,
                    speed,
                    evolution: std::mem::take(&mut self.evolution),
                })
            }
            _ => None,
        }
    }

    /// Writes the message to the log, if logging is enabled.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger, .. } | TelemetryMode::All { logger, .. } => (logger)(message),
            _ => {}
        }
    }
}

//! The periodic recomputation loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

use wattgrid_core::{AgentConfig, TrafficClass};
use wattgrid_scheduler::{ClassRates, Scheduler};

use crate::board::DecisionBoard;
use crate::counters::ClassCounters;
use crate::forecast::{fetch_or_default, ForecastFn};

/// Owns the counters and the decision board, and re-runs the scheduler
/// on a fixed interval.
///
/// On each tick: fetch the green-power forecast (falling back to the
/// configured default), drain the per-class request counters into
/// per-second rates, invoke the scheduler, and publish the new decision
/// snapshot atomically. The loop stops promptly when the shutdown
/// signal flips.
pub struct Agent {
    scheduler: Scheduler,
    counters: Arc<ClassCounters>,
    board: Arc<DecisionBoard>,
    forecast: Option<ForecastFn>,
    default_green_watts: f64,
    interval: Duration,
    forecast_timeout: Duration,
}

impl Agent {
    /// Create an agent over a validated catalog.
    ///
    /// The board starts from a zero-rate, zero-budget scheduling pass,
    /// so readers always find a valid (most conservative) snapshot
    /// before the first tick.
    pub fn new(scheduler: Scheduler, settings: &AgentConfig) -> Self {
        let initial = scheduler.select_configurations(&ClassRates::default(), 0.0);
        Self {
            scheduler,
            counters: Arc::new(ClassCounters::new()),
            board: Arc::new(DecisionBoard::new(initial)),
            forecast: None,
            default_green_watts: settings.default_green_watts,
            interval: Duration::from_secs(settings.interval_secs),
            forecast_timeout: Duration::from_secs(settings.forecast_timeout_secs),
        }
    }

    /// Attach the forecast collaborator's fetch callback.
    pub fn with_forecast(mut self, forecast: ForecastFn) -> Self {
        self.forecast = Some(forecast);
        self
    }

    /// Counters the request-classification path increments.
    pub fn counters(&self) -> Arc<ClassCounters> {
        Arc::clone(&self.counters)
    }

    /// Board the request-routing path reads decisions from.
    pub fn board(&self) -> Arc<DecisionBoard> {
        Arc::clone(&self.board)
    }

    /// Run one scheduling cycle immediately.
    pub async fn recompute(&self) {
        let green_watts = fetch_or_default(
            self.forecast.as_ref(),
            self.forecast_timeout,
            self.default_green_watts,
        )
        .await;

        let counts = self.counters.drain();
        let rates = counts.rates(self.interval.as_secs());
        let decisions = self.scheduler.select_configurations(&rates, green_watts);

        info!(
            green_watts,
            sustained_rps = rates.sustained,
            balanced_rps = rates.balanced,
            performance_rps = rates.performance,
            endpoints = decisions.len(),
            "scheduling cycle complete"
        );
        for (endpoint, decision) in &decisions {
            for class in TrafficClass::ALL {
                debug!(
                    %endpoint,
                    class = class.as_str(),
                    expected_draw_watts = decision.for_class(class).expected_draw,
                    expected_savings_joules = decision.for_class(class).expected_savings,
                    "selection for next interval"
                );
            }
        }

        self.board.publish(decisions).await;
    }

    /// Drive the recomputation loop until `shutdown` flips to true (or
    /// its sender is dropped).
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        info!(
            interval_secs = self.interval.as_secs(),
            default_green_watts = self.default_green_watts,
            "wattgrid agent started"
        );

        loop {
            tokio::select! {
                _ = tokio::time::sleep(self.interval) => self.recompute().await,
                _ = shutdown.changed() => {
                    info!("wattgrid agent shutting down");
                    break;
                }
            }
        }
    }
}

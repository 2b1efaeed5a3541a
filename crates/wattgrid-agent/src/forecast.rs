//! Green-power forecast seam.
//!
//! The transport that produces the forecast (HTTP fetch, time-series
//! query, …) belongs to an external collaborator; the agent only needs
//! an async callback yielding the average green watts expected over the
//! coming interval, plus a configured default for when that callback
//! fails.

use std::time::Duration;

use tracing::warn;

/// Future type returned by a forecast callback.
pub type BoxForecast =
    std::pin::Pin<Box<dyn std::future::Future<Output = anyhow::Result<f64>> + Send>>;

/// Callback supplied by the forecast collaborator.
pub type ForecastFn = Box<dyn Fn() -> BoxForecast + Send + Sync>;

/// Fetch the forecast, bounded by `timeout`.
///
/// Any failure — fetch error, timeout, or a non-finite value — is
/// logged and replaced by `default_watts`; a broken forecast source
/// must never interrupt the recomputation loop.
pub async fn fetch_or_default(
    source: Option<&ForecastFn>,
    timeout: Duration,
    default_watts: f64,
) -> f64 {
    let Some(fetch) = source else {
        return default_watts;
    };

    match tokio::time::timeout(timeout, fetch()).await {
        Ok(Ok(watts)) if watts.is_finite() => watts,
        Ok(Ok(watts)) => {
            warn!(watts, default_watts, "forecast returned a non-finite value, using default");
            default_watts
        }
        Ok(Err(error)) => {
            warn!(%error, default_watts, "forecast fetch failed, using default");
            default_watts
        }
        Err(_) => {
            warn!(
                timeout_secs = timeout.as_secs_f64(),
                default_watts, "forecast fetch timed out, using default"
            );
            default_watts
        }
    }
}

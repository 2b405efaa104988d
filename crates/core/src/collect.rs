use crate::domain::operators;
use crate::domain::returns::{Horizon, ReturnRecord};
use crate::ingest::{FetchError, HorizonReturns, ReturnsProvider};
use std::collections::BTreeSet;
use std::time::Duration;

/// Courtesy pause between consecutive SUPEN calls, per the API's page-load
/// guidance. Never shortened in production runs.
pub const CALL_DELAY: Duration = Duration::from_secs(10);

/// Sequences the three horizon fetches and merges them into one record per
/// operator. Any fetch error aborts the whole collection unchanged.
#[derive(Debug)]
pub struct Collector<P> {
    provider: P,
    call_delay: Duration,
}

impl<P: ReturnsProvider> Collector<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            call_delay: CALL_DELAY,
        }
    }

    /// Tests substitute a zero delay here; the sequencing logic is unchanged.
    pub fn with_call_delay(mut self, call_delay: Duration) -> Self {
        self.call_delay = call_delay;
        self
    }

    pub async fn collect(&self) -> Result<Vec<ReturnRecord>, FetchError> {
        let mut by_horizon: Vec<(Horizon, HorizonReturns)> = Vec::with_capacity(Horizon::ALL.len());

        for (idx, horizon) in Horizon::ALL.into_iter().enumerate() {
            if idx != 0 {
                tracing::info!(
                    delay_secs = self.call_delay.as_secs(),
                    "pausing before next horizon call"
                );
                tokio::time::sleep(self.call_delay).await;
            }

            let returns = self.provider.fetch_horizon(horizon).await?;
            tracing::info!(
                source = self.provider.source_name(),
                horizon = horizon.label(),
                entries = returns.len(),
                "collected horizon"
            );
            by_horizon.push((horizon, returns));
        }

        Ok(merge(&by_horizon))
    }
}

/// One record per operator code seen in at least one horizon response.
/// Horizons that did not report a code stay `None`.
fn merge(by_horizon: &[(Horizon, HorizonReturns)]) -> Vec<ReturnRecord> {
    let mut codes = BTreeSet::new();
    for (_, returns) in by_horizon {
        codes.extend(returns.keys().cloned());
    }

    let lookup = |horizon: Horizon, code: &str| -> Option<f64> {
        by_horizon
            .iter()
            .find(|(h, _)| *h == horizon)
            .and_then(|(_, returns)| returns.get(code).copied())
    };

    codes
        .into_iter()
        .map(|code| {
            let name = operators::display_name(&code)
                .map(str::to_string)
                .unwrap_or_else(|| code.clone());
            let short = lookup(Horizon::Short, &code);
            let medium = lookup(Horizon::Medium, &code);
            let long = lookup(Horizon::Long, &code);

            ReturnRecord {
                code,
                name,
                short,
                medium,
                long,
            }
        })
        .collect()
}

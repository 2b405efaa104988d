pub mod supen;

mod error;

pub use error::FetchError;

use crate::domain::returns::Horizon;
use std::collections::BTreeMap;

/// Mapping from operator code to nominal-return percentage for one horizon.
/// Operators absent from the response are omitted, not defaulted.
pub type HorizonReturns = BTreeMap<String, f64>;

#[async_trait::async_trait]
pub trait ReturnsProvider: Send + Sync {
    fn source_name(&self) -> &'static str;

    async fn fetch_horizon(&self, horizon: Horizon) -> Result<HorizonReturns, FetchError>;
}

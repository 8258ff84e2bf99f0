use super::{FetchResult, SunTimes, SunTimesProvider};
use crate::coordinates::Coordinates;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Provider that answers every lookup with the same sun times.
pub struct FixedSunTimes {
    times: SunTimes,
}

impl FixedSunTimes {
    pub fn new(times: SunTimes) -> Self {
        Self { times }
    }
}

#[async_trait]
impl SunTimesProvider for FixedSunTimes {
    async fn fetch(
        &self,
        _coordinates: Coordinates,
        _date: Option<NaiveDate>,
    ) -> FetchResult<SunTimes> {
        Ok(self.times)
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }
}

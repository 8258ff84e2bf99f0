use crate::coordinates::Coordinates;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

pub mod error;
pub mod fixed;
pub mod sunrise_sunset;

pub use error::{FetchError, FetchResult};
pub use fixed::FixedSunTimes;
pub use sunrise_sunset::{DEFAULT_API_URL, SunriseSunsetClient, SunriseSunsetConfig};

/// Sunrise and sunset for one location and day, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

impl SunTimes {
    pub fn new(sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> Self {
        Self { sunrise, sunset }
    }

    pub fn day_length(&self) -> chrono::Duration {
        self.sunset - self.sunrise
    }
}

#[async_trait]
pub trait SunTimesProvider: Send + Sync {
    /// Looks up sun times at `coordinates`. `date` selects a UTC calendar
    /// day; `None` leaves the choice to the provider (normally today).
    async fn fetch(
        &self,
        coordinates: Coordinates,
        date: Option<NaiveDate>,
    ) -> FetchResult<SunTimes>;

    fn provider_name(&self) -> &'static str;
}

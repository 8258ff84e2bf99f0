use crate::console::console;
use crate::coordinates::Coordinates;
use crate::sun_times::{FetchResult, SunTimes, SunTimesProvider};
use crate::time_of_day::{TimeOfDay, classify, image_for};
use chrono::{DateTime, Utc};

/// Everything one lookup produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub sun_times: SunTimes,
    pub instant: DateTime<Utc>,
    pub category: Option<TimeOfDay>,
    pub image: &'static str,
}

/// Fetches sun times for `coordinates` and picks the image for `at`, or for
/// the current time when `at` is `None`. A fixed `at` also pins the lookup to
/// that instant's UTC date.
pub async fn resolve_image(
    provider: &dyn SunTimesProvider,
    coordinates: Coordinates,
    at: Option<DateTime<Utc>>,
) -> FetchResult<Outcome> {
    let sun_times = provider
        .fetch(coordinates, at.map(|instant| instant.date_naive()))
        .await?;
    let day_length = sun_times.day_length();
    console().verbose(&format!(
        "Sunrise {} / sunset {}, day length {}h{:02}m ({})",
        sun_times.sunrise.to_rfc3339(),
        sun_times.sunset.to_rfc3339(),
        day_length.num_hours(),
        day_length.num_minutes() % 60,
        provider.provider_name()
    ));

    let instant = at.unwrap_or_else(Utc::now);
    let category = classify(instant, &sun_times);
    match category {
        Some(category) => console().verbose(&format!("{} is {}", instant.to_rfc3339(), category)),
        None => console().verbose(&format!(
            "{} falls between the noon and evening windows",
            instant.to_rfc3339()
        )),
    }

    Ok(Outcome {
        sun_times,
        instant,
        category,
        image: image_for(category),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sun_times::{FetchError, FixedSunTimes};
    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone};
    use std::sync::Mutex;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, hour, 0, 0).unwrap()
    }

    fn reference_day() -> FixedSunTimes {
        FixedSunTimes::new(SunTimes::new(at(6), at(18)))
    }

    #[tokio::test]
    async fn picks_image_for_given_instant() {
        let provider = reference_day();
        let coords = Coordinates::new(0.0, 0.0);

        let cases = [
            (0, "night.png"),
            (5, "night.png"),
            (7, "morning.png"),
            (13, "noon.png"),
            (18, "night.png"),
        ];
        for (hour, expected) in cases {
            let outcome = resolve_image(&provider, coords, Some(at(hour))).await.unwrap();
            assert_eq!(outcome.image, expected, "hour {}", hour);
            assert_eq!(outcome.instant, at(hour));
        }
    }

    #[tokio::test]
    async fn uses_current_time_when_no_instant_given() {
        let before = Utc::now();
        let outcome = resolve_image(&reference_day(), Coordinates::new(0.0, 0.0), None)
            .await
            .unwrap();

        assert!(outcome.instant >= before);
        // Fixed sun times are in the past, so now is always after sunset.
        assert_eq!(outcome.category, Some(TimeOfDay::Night));
        assert_eq!(outcome.image, "night.png");
    }

    #[tokio::test]
    async fn undefined_category_falls_back_to_night() {
        let provider = FixedSunTimes::new(SunTimes::new(at(3), at(23)));

        let outcome = resolve_image(&provider, Coordinates::new(70.0, 20.0), Some(at(15)))
            .await
            .unwrap();

        assert_eq!(outcome.category, None);
        assert_eq!(outcome.image, "night.png");
    }

    struct RecordingProvider {
        dates: Mutex<Vec<Option<NaiveDate>>>,
    }

    #[async_trait]
    impl SunTimesProvider for RecordingProvider {
        async fn fetch(
            &self,
            _coordinates: Coordinates,
            date: Option<NaiveDate>,
        ) -> FetchResult<SunTimes> {
            self.dates.lock().unwrap().push(date);
            Ok(SunTimes::new(at(6), at(18)))
        }

        fn provider_name(&self) -> &'static str {
            "recording"
        }
    }

    #[tokio::test]
    async fn fixed_instant_pins_the_date() {
        let provider = RecordingProvider {
            dates: Mutex::new(Vec::new()),
        };

        resolve_image(&provider, Coordinates::new(0.0, 0.0), Some(at(7)))
            .await
            .unwrap();
        resolve_image(&provider, Coordinates::new(0.0, 0.0), None)
            .await
            .unwrap();

        assert_eq!(
            *provider.dates.lock().unwrap(),
            vec![NaiveDate::from_ymd_opt(2024, 3, 20), None]
        );
    }

    struct FailingProvider;

    #[async_trait]
    impl SunTimesProvider for FailingProvider {
        async fn fetch(
            &self,
            _coordinates: Coordinates,
            _date: Option<NaiveDate>,
        ) -> FetchResult<SunTimes> {
            Err(FetchError::data("response has no results"))
        }

        fn provider_name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn fetch_errors_propagate() {
        let err = resolve_image(&FailingProvider, Coordinates::new(0.0, 0.0), None)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Data { .. }));
    }
}

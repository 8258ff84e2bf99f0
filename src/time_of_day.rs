use crate::sun_times::SunTimes;
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;

/// Filename printed when the category is unknown or undefined.
pub const DEFAULT_IMAGE: &str = "night.png";

/// Length of each daylight window anchored to sunrise or sunset.
const WINDOW_HOURS: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Night,
    Morning,
    Noon,
    Evening,
    Sunrise,
    Sunset,
}

/// Category to filename lookup.
pub const IMAGE_MAP: [(TimeOfDay, &str); 6] = [
    (TimeOfDay::Morning, "morning.png"),
    (TimeOfDay::Noon, "noon.png"),
    (TimeOfDay::Sunrise, "sunrise.png"),
    (TimeOfDay::Sunset, "sunset.png"),
    (TimeOfDay::Evening, "evening.png"),
    (TimeOfDay::Night, "night.png"),
];

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 6] = [
        TimeOfDay::Night,
        TimeOfDay::Morning,
        TimeOfDay::Noon,
        TimeOfDay::Evening,
        TimeOfDay::Sunrise,
        TimeOfDay::Sunset,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::Night => "night",
            TimeOfDay::Morning => "morning",
            TimeOfDay::Noon => "noon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Sunrise => "sunrise",
            TimeOfDay::Sunset => "sunset",
        }
    }

    pub fn image(self) -> &'static str {
        IMAGE_MAP
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, image)| *image)
            .unwrap_or(DEFAULT_IMAGE)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        TimeOfDay::ALL
            .into_iter()
            .find(|category| category.label() == lower)
            .ok_or_else(|| format!("Unknown time of day: {}", s))
    }
}

/// Buckets `now` against the day's sunrise and sunset.
///
/// The windows are fixed at six hours from sunrise (morning, noon) and six
/// hours before sunset (evening), so a day much longer than twelve hours
/// leaves a gap between noon and evening. Instants in that gap have no
/// category and yield `None`.
///
/// Exact sunrise is morning. Exact sunset is night only when the day is at
/// least twelve hours long; on shorter days the noon window still covers it.
/// The `Sunrise` and `Sunset` categories are never produced here.
pub fn classify(now: DateTime<Utc>, sun: &SunTimes) -> Option<TimeOfDay> {
    let window = Duration::hours(WINDOW_HOURS);

    if now < sun.sunrise {
        Some(TimeOfDay::Night)
    } else if now < sun.sunrise + window {
        Some(TimeOfDay::Morning)
    } else if now < sun.sunrise + window * 2 {
        Some(TimeOfDay::Noon)
    } else if sun.sunset - window <= now && now < sun.sunset {
        Some(TimeOfDay::Evening)
    } else if now >= sun.sunset {
        Some(TimeOfDay::Night)
    } else {
        None
    }
}

/// Filename for a classification result, `night.png` when undefined.
pub fn image_for(category: Option<TimeOfDay>) -> &'static str {
    category.map(TimeOfDay::image).unwrap_or(DEFAULT_IMAGE)
}

/// Filename for a category label, `night.png` for anything unrecognised.
pub fn image_for_label(label: &str) -> &'static str {
    image_for(label.parse().ok())
}

pub mod app;
pub mod cli;
pub mod config;
pub mod console;
pub mod coordinates;
pub mod error;
pub mod sun_times;
pub mod time_of_day;

pub use app::{Outcome, resolve_image};
pub use config::{AppConfig, ConfigError};
pub use console::{Console, VerbosityLevel, console, init_console};
pub use coordinates::{CoordinateError, Coordinates};
pub use error::{DaypartError, DaypartResult};
pub use sun_times::{
    FetchError, FixedSunTimes, SunTimes, SunTimesProvider, SunriseSunsetClient,
    SunriseSunsetConfig,
};
pub use time_of_day::{TimeOfDay, classify, image_for, image_for_label};

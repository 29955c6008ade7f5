//! Domain entities - Objects with identity and lifecycle

mod user;
mod weather_record;
mod weather_report;

pub use user::User;
pub use weather_record::WeatherRecord;
pub use weather_report::{WeatherReadings, WeatherReport};

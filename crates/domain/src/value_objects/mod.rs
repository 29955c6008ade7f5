//! Value Objects - Immutable, identity-less domain primitives

mod coordinates;
mod geo_location;
mod language;
mod password_policy;
mod place_query;
mod units;
mod user_id;
mod username;

pub use coordinates::Coordinates;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use language::Language;
pub use password_policy::{PASSWORD_SPECIAL_CHARACTERS, check_password_strength};
pub use place_query::PlaceQuery;
pub use units::Units;
pub use user_id::UserId;
pub use username::Username;

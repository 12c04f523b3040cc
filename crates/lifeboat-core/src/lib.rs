pub mod features;
pub mod passenger;

pub use features::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector};
pub use passenger::{DEFAULT_AGE, DEFAULT_FARE, ParseError, Passenger, PassengerForm, Port, Sex};

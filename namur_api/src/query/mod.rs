mod common;
pub use self::common::{Query, QueryCommon, DEFAULT_ROWS};

mod parking;
pub use self::parking::{ParkingQuery, PARKING_DATASET};

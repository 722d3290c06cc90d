mod record;
pub use self::record::{Geometry, RawFields, RawRecord, SearchResponse};

mod parking_type;
pub use self::parking_type::ParkingType;

mod spot;
pub use self::spot::ParkingSpot;

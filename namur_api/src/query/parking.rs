//! Query builder for the parking spots dataset.

use url::Url;

use super::common::{Query, QueryCommon};
use crate::types::ParkingType;

/// Identifier of the parking spots dataset.
pub const PARKING_DATASET: &str = "namur-parking-emplacements";

/// Query for `search/` on the parking spots dataset, refined by parking type.
#[derive(Clone, Debug)]
pub struct ParkingQuery {
    pub common: QueryCommon,
    pub parking_type: ParkingType,
}

impl Default for ParkingQuery {
    fn default() -> Self {
        Self {
            common: QueryCommon::new(PARKING_DATASET),
            parking_type: ParkingType::default(),
        }
    }
}

impl Query for ParkingQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        url.query_pairs_mut()
            .append_pair("refine.type_parking", self.parking_type.label());
        url
    }

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl ParkingQuery {
    /// Restricts results to one parking type.
    pub fn with_parking_type(mut self, parking_type: ParkingType) -> Self {
        self.parking_type = parking_type;
        self
    }
}

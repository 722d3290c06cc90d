//! Asynchronous client for the parking spots dataset of the Open Data
//! Platform of Namur (`data.namur.be`).

mod client;
mod errors;
mod query;
mod session;
pub mod types;
mod user_agent;
pub use self::client::{Client, BASE_API_URL, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::query::{ParkingQuery, Query, QueryCommon, DEFAULT_ROWS, PARKING_DATASET};
pub use self::session::{Session, SessionHandle};
pub use reqwest::Method;

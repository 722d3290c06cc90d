//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] fields.

use url::Url;

/// Number of rows requested when no limit is given.
pub const DEFAULT_ROWS: u32 = 10;

/// Trait implemented by all query builders. Provides URL serialization and
/// the shared `rows` limit.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the maximum number of records returned.
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().rows = limit;
        self
    }
}

/// Fields shared by all dataset queries.
#[derive(Clone, Debug)]
pub struct QueryCommon {
    /// Dataset identifier on the Open Data Platform.
    pub dataset: String,
    /// Maximum number of records. Defaults to 10.
    pub rows: u32,
}

impl QueryCommon {
    pub fn new(dataset: &str) -> Self {
        Self {
            dataset: dataset.to_string(),
            rows: DEFAULT_ROWS,
        }
    }

    /// Appends `dataset` and `rows` to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("dataset", &self.dataset)
            .append_pair("rows", &self.rows.to_string());
        url
    }
}

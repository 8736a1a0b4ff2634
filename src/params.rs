/// Filters for one fetch call.
///
/// Date fields are ISO `YYYY-MM-DD` strings and are passed to the server
/// as-is; no format validation happens client-side.
#[derive(Debug, Clone)]
pub struct FetchParams {
    /// Stock ticker; empty means no ticker filter.
    pub ticker: String,
    /// Records published on or after this day.
    pub start_date: String,
    /// Records published on or before this day.
    pub end_date: String,
    /// Records published exactly on this day; overrides the range bounds.
    pub date: String,
    /// Maximum number of records; 0 leaves the server default in place.
    pub limit: u32,
    /// Number of records to skip.
    pub offset: u32,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            ticker: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            date: String::new(),
            limit: 100,
            offset: 0,
        }
    }
}

impl FetchParams {
    pub fn for_ticker(ticker: &str) -> Self {
        Self {
            ticker: ticker.to_string(),
            ..Self::default()
        }
    }

    /// True when both range bounds are set, no exact date overrides them, and
    /// the bounds are out of order. ISO dates compare chronologically as
    /// strings, so no parsing is needed.
    pub(crate) fn date_range_inverted(&self) -> bool {
        !self.start_date.is_empty()
            && !self.end_date.is_empty()
            && self.date.is_empty()
            && self.start_date > self.end_date
    }

    /// Assembles the query pairs for the request. An exact `date` takes
    /// precedence over the range bounds: `published_on__gte`/`__lte` are
    /// never emitted alongside `published_on`.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        // "all_feilds" is misspelled on the wire; the backend expects it
        // exactly like this.
        let mut pairs = vec![
            ("all_feilds", "False".to_string()),
            (
                "ordering",
                "-published_on,-share_of_article,-pagerank".to_string(),
            ),
        ];
        if !self.ticker.is_empty() {
            pairs.push(("ticker", self.ticker.clone()));
        }
        if self.date.is_empty() {
            if !self.start_date.is_empty() {
                pairs.push(("published_on__gte", self.start_date.clone()));
            }
            if !self.end_date.is_empty() {
                pairs.push(("published_on__lte", self.end_date.clone()));
            }
        } else {
            pairs.push(("published_on", self.date.clone()));
        }
        if self.limit > 0 {
            pairs.push(("limit", self.limit.to_string()));
        }
        if self.offset > 0 {
            pairs.push(("offset", self.offset.to_string()));
        }
        pairs
    }
}

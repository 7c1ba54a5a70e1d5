use std::fmt;

use serde::{Serialize, Serializer};
use valcount_networks::EndpointSpec;
use valcount_rpc::VoteAccountSource;

use crate::fetcher::{fetch, FetchResult, RetryPolicy};

pub const ERROR_MARKER: &str = "Error";

/// A numeric report cell, or the error marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Count(u64),
    Error,
}

impl Cell {
    /// Sum of two cells; any error operand makes the sum an error
    pub fn sum(self, other: Cell) -> Cell {
        match (self, other) {
            (Cell::Count(a), Cell::Count(b)) => Cell::Count(a + b),
            _ => Cell::Error,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Count(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Count(n) => write!(f, "{}", n),
            Cell::Error => f.write_str(ERROR_MARKER),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Count(n) => serializer.serialize_u64(*n),
            Cell::Error => serializer.serialize_str(ERROR_MARKER),
        }
    }
}

/// One line of the census, in the column order of the rendered table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Network")]
    pub network: String,
    #[serde(rename = "Active Validators")]
    pub active: Cell,
    #[serde(rename = "Inactive Validators")]
    pub inactive: Cell,
    #[serde(rename = "Total")]
    pub total: Cell,
}

impl ReportRow {
    pub fn new(network: impl Into<String>, active: Cell, inactive: Cell) -> Self {
        Self {
            network: network.into(),
            active,
            inactive,
            total: active.sum(inactive),
        }
    }

    pub fn from_fetch(network: impl Into<String>, result: &FetchResult) -> Self {
        match result {
            FetchResult::Counts(counts) => {
                Self::new(network, Cell::Count(counts.active), Cell::Count(counts.inactive))
            }
            FetchResult::Failure { .. } => Self::new(network, Cell::Error, Cell::Error),
        }
    }

    pub fn is_error(&self) -> bool {
        !self.total.is_numeric()
    }
}

/// Fetch every endpoint in declaration order and build the report rows.
///
/// Endpoints are queried one after another. A failed endpoint yields an
/// error row and the next endpoint is still queried.
pub async fn build_report<S>(
    source: &S,
    endpoints: &[EndpointSpec],
    policy: &RetryPolicy,
) -> Vec<ReportRow>
where
    S: VoteAccountSource + ?Sized,
{
    let mut rows = Vec::with_capacity(endpoints.len());
    for endpoint in endpoints {
        let result = fetch(source, endpoint, policy).await;
        rows.push(ReportRow::from_fetch(endpoint.name.clone(), &result));
    }
    rows
}

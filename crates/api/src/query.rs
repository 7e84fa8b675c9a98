//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the catalog list (`?search=`).
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: Option<String>,
}

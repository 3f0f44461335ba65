use std::future::Future;

use crate::client::types::SearchResponse;
use crate::error::SearchError;
use crate::search::Query;

/// Anything that can answer a recipe query.
///
/// Implementations make exactly one request per call and never retry.
pub trait RecipeSource: Send + Sync + 'static {
    fn search(
        &self,
        query: &Query,
    ) -> impl Future<Output = Result<SearchResponse, SearchError>> + Send;
}

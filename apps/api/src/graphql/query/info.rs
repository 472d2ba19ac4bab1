//! Static API information query

use async_graphql::Object;

/// Text returned by the `info` query
pub const INFO_MESSAGE: &str = "This is my practice, manually-created GraphQL Api!!!";

/// API information query
#[derive(Default)]
pub struct InfoQuery;

#[Object]
impl InfoQuery {
    /// Short description of this API
    async fn info(&self) -> &'static str {
        INFO_MESSAGE
    }
}

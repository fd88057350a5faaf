use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::UpstreamError;

/// Issues upstream GETs and hands back the raw JSON payload.
///
/// Implementations must be safe to call from many resolvers at once. Uses
/// RPITIT for the async method, avoiding the `async-trait` crate.
pub trait UpstreamFetch: Send + Sync {
    /// Perform one GET against the endpoint's upstream.
    ///
    /// Returns the decoded JSON body on a 200, otherwise a typed failure.
    /// Never retries.
    fn get(&self, endpoint: &Endpoint) -> impl Future<Output = Result<Value, UpstreamError>> + Send;
}

/// Object-safe wrapper for [`UpstreamFetch`].
///
/// RPITIT traits cannot be used as `dyn Trait`. This wrapper uses boxed
/// futures so the GraphQL layer can hold any fetcher behind an `Arc`.
pub trait DynUpstreamFetch: Send + Sync {
    fn get<'a>(
        &'a self,
        endpoint: &'a Endpoint,
    ) -> Pin<Box<dyn Future<Output = Result<Value, UpstreamError>> + Send + 'a>>;
}

/// Blanket impl: any concrete `UpstreamFetch` automatically implements `DynUpstreamFetch`.
impl<T: UpstreamFetch + 'static> DynUpstreamFetch for T {
    fn get<'a>(
        &'a self,
        endpoint: &'a Endpoint,
    ) -> Pin<Box<dyn Future<Output = Result<Value, UpstreamError>> + Send + 'a>> {
        Box::pin(UpstreamFetch::get(self, endpoint))
    }
}

use async_graphql::{Context, Object, ID};
use recipe_gateway_core::{decode_recipe, decode_review, decode_review_list};
use recipe_gateway_upstream::{is_path_addressable, Endpoint, UpstreamError};

use crate::config::MalformedReviewPolicy;
use crate::context::GatewayContext;
use crate::error::{bad_user_input, upstream_error_to_gql};
use crate::types::{RecipeNode, ReviewNode};

/// Root query type. Read-only: every field fans out to one upstream call.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Fetch a single recipe from the recipe service.
    ///
    /// Null when the recipe service cannot produce it.
    async fn recipe(
        &self,
        ctx: &Context<'_>,
        recipe_id: ID,
    ) -> async_graphql::Result<Option<RecipeNode>> {
        let gql_ctx = ctx.data::<GatewayContext>()?;
        let recipe_id = require_id("recipeId", &recipe_id)?;
        let endpoint = Endpoint::recipe(recipe_id);

        let outcome = gql_ctx.fetch(&endpoint).await.and_then(|payload| {
            decode_recipe(recipe_id, &payload)
                .map_err(|err| UpstreamError::malformed(endpoint.upstream(), err))
        });

        Ok(absent_on_failure(&endpoint, outcome).map(RecipeNode))
    }

    /// Fetch a single review from the review service.
    ///
    /// Null when the review service cannot produce it.
    async fn review(
        &self,
        ctx: &Context<'_>,
        review_id: ID,
    ) -> async_graphql::Result<Option<ReviewNode>> {
        let gql_ctx = ctx.data::<GatewayContext>()?;
        let review_id = require_id("reviewId", &review_id)?;
        let endpoint = Endpoint::review(review_id);

        let outcome = gql_ctx.fetch(&endpoint).await.and_then(|payload| {
            decode_review(&payload)
                .map_err(|err| UpstreamError::malformed(endpoint.upstream(), err))
        });

        Ok(absent_on_failure(&endpoint, outcome).map(ReviewNode))
    }

    /// All reviews written by a user, in the order the review service lists them.
    ///
    /// Empty when the review service cannot be reached or answers with an
    /// error. A malformed review is skipped, or fails the whole list when the
    /// gateway is configured with `on_malformed_review = "fail"`.
    async fn user_reviews(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
    ) -> async_graphql::Result<Option<Vec<ReviewNode>>> {
        let gql_ctx = ctx.data::<GatewayContext>()?;
        let user_id = require_id("userId", &user_id)?;
        let endpoint = Endpoint::user_reviews(user_id);
        let policy = gql_ctx.on_malformed_review;

        let payload = match gql_ctx.fetch(&endpoint).await {
            Ok(payload) => payload,
            Err(err) => {
                log_degraded(&endpoint, &err);
                return Ok(Some(Vec::new()));
            }
        };

        let elements = match decode_review_list(&payload) {
            Ok(elements) => elements,
            Err(err) => {
                let err = UpstreamError::malformed(endpoint.upstream(), err);
                log_degraded(&endpoint, &err);
                return match policy {
                    MalformedReviewPolicy::Skip => Ok(Some(Vec::new())),
                    MalformedReviewPolicy::Fail => Err(upstream_error_to_gql(&err)),
                };
            }
        };

        let mut reviews = Vec::with_capacity(elements.len());
        for (index, element) in elements.into_iter().enumerate() {
            match element {
                Ok(review) => reviews.push(ReviewNode(review)),
                Err(err) => {
                    let err = UpstreamError::MalformedUpstreamPayload {
                        upstream: endpoint.upstream(),
                        reason: format!("review {index}: {err}"),
                    };
                    log_degraded(&endpoint, &err);
                    if policy == MalformedReviewPolicy::Fail {
                        return Err(upstream_error_to_gql(&err));
                    }
                }
            }
        }

        Ok(Some(reviews))
    }
}

/// Identifiers are opaque, but they must be present and usable as a path segment.
fn require_id<'a>(argument: &str, id: &'a ID) -> async_graphql::Result<&'a str> {
    if id.trim().is_empty() {
        return Err(bad_user_input(format!(
            "argument '{argument}' must not be empty"
        )));
    }
    if !is_path_addressable(id.as_str()) {
        return Err(bad_user_input(format!(
            "argument '{argument}' cannot be '{}'",
            id.as_str()
        )));
    }
    Ok(id.as_str())
}

/// Root-field failure policy: log and resolve to an absent value.
fn absent_on_failure<T>(endpoint: &Endpoint, outcome: Result<T, UpstreamError>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(err) => {
            log_degraded(endpoint, &err);
            None
        }
    }
}

fn log_degraded(endpoint: &Endpoint, err: &UpstreamError) {
    if err.is_not_found() {
        tracing::debug!(%endpoint, "not found upstream");
    } else {
        tracing::warn!(%endpoint, code = err.code(), "upstream call degraded: {err}");
    }
}

use async_graphql::{Context, Object, ID};
use recipe_gateway_core::{decode_recipe_title, Recipe, Review};
use recipe_gateway_upstream::{is_path_addressable, Endpoint, UpstreamError};

use crate::context::GatewayContext;
use crate::error::upstream_error_to_gql;

/// GraphQL view of a [`Recipe`].
pub struct RecipeNode(pub Recipe);

#[Object(name = "Recipe")]
impl RecipeNode {
    async fn recipe_id(&self) -> ID {
        ID(self.0.recipe_id.clone())
    }

    async fn title(&self) -> Option<&str> {
        self.0.title.as_deref()
    }

    async fn author_id(&self) -> Option<ID> {
        self.0.author_id.clone().map(ID)
    }

    async fn ingredients(&self) -> Option<&[String]> {
        self.0.ingredients.as_deref()
    }

    async fn steps(&self) -> Option<&[String]> {
        self.0.steps.as_deref()
    }

    async fn images(&self) -> Option<&[String]> {
        self.0.images.as_deref()
    }
}

/// GraphQL view of a [`Review`].
pub struct ReviewNode(pub Review);

#[Object(name = "Review")]
impl ReviewNode {
    async fn review_id(&self) -> ID {
        ID(self.0.review_id.clone())
    }

    async fn recipe_id(&self) -> ID {
        ID(self.0.recipe_id.clone())
    }

    async fn user_id(&self) -> ID {
        ID(self.0.user_id.clone())
    }

    async fn date(&self) -> &str {
        &self.0.date
    }

    /// Rating as reported by the review service, in string form.
    async fn rating(&self) -> &str {
        &self.0.rating
    }

    async fn text(&self) -> &str {
        &self.0.text
    }

    async fn upvotes(&self) -> &str {
        &self.0.upvotes
    }

    async fn downvotes(&self) -> &str {
        &self.0.downvotes
    }

    /// Title of the reviewed recipe.
    ///
    /// Fetched from the recipe service each time it is selected. Null with a
    /// field error when that call fails; null without an error when the recipe
    /// has no title.
    async fn recipe_title(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<String>> {
        let gql_ctx = ctx.data::<GatewayContext>()?;
        let endpoint = Endpoint::recipe(self.0.recipe_id.as_str());
        if !is_path_addressable(&self.0.recipe_id) {
            let err = UpstreamError::UnaddressableId {
                upstream: endpoint.upstream(),
                id: self.0.recipe_id.clone(),
            };
            return Err(derived_field_failure(&endpoint, err));
        }

        let payload = gql_ctx
            .fetch(&endpoint)
            .await
            .map_err(|err| derived_field_failure(&endpoint, err))?;

        decode_recipe_title(&payload).map_err(|err| {
            derived_field_failure(&endpoint, UpstreamError::malformed(endpoint.upstream(), err))
        })
    }
}

fn derived_field_failure(endpoint: &Endpoint, err: UpstreamError) -> async_graphql::Error {
    tracing::warn!(%endpoint, code = err.code(), "recipeTitle unavailable: {err}");
    upstream_error_to_gql(&err)
}

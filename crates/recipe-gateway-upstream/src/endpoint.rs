use std::fmt;

/// The two independently operated REST services behind the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upstream {
    Recipe,
    Review,
}

impl Upstream {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recipe => "recipe",
            Self::Review => "review",
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single upstream GET the gateway knows how to issue.
///
/// Identifiers are opaque; they become one path segment each and are
/// percent-encoded by the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET {recipe}/recipes/{recipe_id}`: a JSON object.
    Recipe { recipe_id: String },
    /// `GET {review}/reviews/{review_id}`: one review tuple.
    Review { review_id: String },
    /// `GET {review}/user/{user_id}`: an array of review tuples.
    UserReviews { user_id: String },
}

impl Endpoint {
    pub fn recipe(recipe_id: impl Into<String>) -> Self {
        Self::Recipe {
            recipe_id: recipe_id.into(),
        }
    }

    pub fn review(review_id: impl Into<String>) -> Self {
        Self::Review {
            review_id: review_id.into(),
        }
    }

    pub fn user_reviews(user_id: impl Into<String>) -> Self {
        Self::UserReviews {
            user_id: user_id.into(),
        }
    }

    /// Which upstream serves this endpoint.
    pub fn upstream(&self) -> Upstream {
        match self {
            Self::Recipe { .. } => Upstream::Recipe,
            Self::Review { .. } | Self::UserReviews { .. } => Upstream::Review,
        }
    }

    /// Path segments appended to the upstream's base URL.
    pub fn path_segments(&self) -> [&str; 2] {
        match self {
            Self::Recipe { recipe_id } => ["recipes", recipe_id.as_str()],
            Self::Review { review_id } => ["reviews", review_id.as_str()],
            Self::UserReviews { user_id } => ["user", user_id.as_str()],
        }
    }
}

/// Whether `id` survives as its own path segment.
///
/// URL parsing resolves `.` and `..` segments (in any percent-encoded
/// spelling too), so such identifiers cannot name an upstream resource.
pub fn is_path_addressable(id: &str) -> bool {
    !matches!(id, "." | "..")
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [collection, id] = self.path_segments();
        write!(f, "{} upstream /{collection}/{id}", self.upstream())
    }
}

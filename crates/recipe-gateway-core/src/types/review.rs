/// Number of positional elements in a review tuple.
pub const REVIEW_TUPLE_LEN: usize = 8;

/// A review decoded from the review upstream's positional tuple.
///
/// Numeric upstream values (`rating`, `upvotes`, `downvotes`) are carried in
/// their string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub review_id: String,
    pub recipe_id: String,
    pub user_id: String,
    pub date: String,
    pub rating: String,
    pub text: String,
    pub upvotes: String,
    pub downvotes: String,
}

impl Review {
    /// Fields in tuple index order: review_id, recipe_id, user_id, date,
    /// rating, text, upvotes, downvotes.
    pub fn positional_fields(&self) -> [&str; REVIEW_TUPLE_LEN] {
        [
            self.review_id.as_str(),
            self.recipe_id.as_str(),
            self.user_id.as_str(),
            self.date.as_str(),
            self.rating.as_str(),
            self.text.as_str(),
            self.upvotes.as_str(),
            self.downvotes.as_str(),
        ]
    }
}

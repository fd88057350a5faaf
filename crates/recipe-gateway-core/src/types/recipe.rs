/// A recipe as returned by the recipe upstream.
///
/// Every field other than `recipe_id` may be absent: the upstream object is
/// taken as-is and missing keys are not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub recipe_id: String,
    pub title: Option<String>,
    pub author_id: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub steps: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

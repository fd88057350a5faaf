mod recipe;
mod review;

pub use recipe::Recipe;
pub use review::{Review, REVIEW_TUPLE_LEN};

pub mod decode;
pub mod error;
pub mod types;

pub use decode::{decode_recipe, decode_recipe_title, decode_review, decode_review_list};
pub use error::DecodeError;
pub use types::{Recipe, Review, REVIEW_TUPLE_LEN};

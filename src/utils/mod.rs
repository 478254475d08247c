pub mod markdown;
pub mod validation;

pub use markdown::strip_markdown;
pub use validation::is_valid_email;

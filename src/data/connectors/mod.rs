mod types;
mod validator;

pub use types::RequiredColumn;
pub use validator::DataValidator;

pub mod user_token;

pub use user_token::{make_span_with_user_token, user_token_middleware, UserToken, USER_TOKEN_HEADER};

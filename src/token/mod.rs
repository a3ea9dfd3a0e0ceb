mod builder;
mod jwt;

pub use builder::TokenBuilder;
pub use jwt::{Jwt, ALGORITHM_HEADER, TOKEN_TYPE, TYPE_HEADER};

pub mod error;
pub mod number_parse;
pub mod routes;

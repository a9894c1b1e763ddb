pub mod models;
pub mod rest;

pub use models::*;
pub use rest::{GithubClient, SearchError};

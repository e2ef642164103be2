pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;

pub use config::Config;
pub use db::{init_db, init_db_with_retry, Repository};
pub use domain::{NewPost, NewUser, Post, User};
pub use error::AppError;

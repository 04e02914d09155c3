pub mod auth;
pub mod catalog;
pub mod db;
pub mod gallery;
pub mod handlers;
pub mod models;
pub mod relay;

pub use db::create_pool;

pub mod app;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod list_query;
pub mod state;
pub mod users;

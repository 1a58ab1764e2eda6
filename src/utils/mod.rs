pub mod app_config;
pub mod db;
pub mod traits;

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod metrics;
pub mod repository;
pub mod session;
pub mod shutdown;
pub mod workflow;

pub mod actions;
pub mod api;
pub mod app;
pub mod config;
pub mod models;
pub mod notice;
pub mod pages;
pub mod roster;
pub mod validation;

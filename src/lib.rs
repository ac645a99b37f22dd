pub mod directory;
pub mod models;
pub mod services;
pub mod web;

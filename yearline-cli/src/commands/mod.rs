pub mod add;
pub mod agenda;
pub mod category;
pub mod config;
pub mod edit;
pub mod remove;
pub mod show;

pub mod attendees;
pub mod config;
pub mod constants;
pub mod container;
pub mod domain;
pub mod error;
pub mod logging;
pub mod registration;
pub mod startup;
pub mod web;

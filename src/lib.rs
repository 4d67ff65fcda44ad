#![crate_name = "avalanche"]

#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod display;
pub mod engine;
pub mod input;
pub mod persistence;
pub mod random;
pub mod scheduler;
pub mod text;
pub mod verbs;
pub mod world;

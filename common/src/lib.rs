//! # Carlot Common
//!
//! Types shared between the car library and its command line front end.

pub mod config;

//! # Carlot Core
//!
//! Builds [`car::Car`] values through the [`factory::CarFactory`].
//!
//! ## Modules
//! * **[`car`]**: The car entity, its value rules and its greeting.
//! * **[`factory`]**: Creates cars wired to a shared config and output sink.
//! * **[`sink`]**: Output channels for deferred name logs.
//! * **[`error`]**: Errors surfaced by car operations.

pub mod car;
pub mod error;
pub mod factory;
pub mod sink;

pub use car::{Car, DEPRECIATION_STEP, flag_key};
pub use carlot_common::config::DEFAULT_LOG_DELAY;
pub use error::CarError;
pub use factory::{CarFactory, create_car};
pub use sink::{ChannelSink, NameSink, TracingSink};

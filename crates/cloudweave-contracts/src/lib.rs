//! cloudweave-contracts
//!
//! The cloud-agnostic service surface: 14 control-plane service traits
//! (§4.6), 11 data-plane client traits (§4.7), and the provider factory
//! (§4.1) that wires a [`cloudweave_core::models::provider_config::ProviderConfig`]
//! to concrete adapters. No adapter bodies live here — see
//! `cloudweave-mock` and `cloudweave-aws`.

pub mod control;
pub mod data;
pub mod factory;

pub use factory::{ProviderFactory, ServiceConstructor, ServiceId};

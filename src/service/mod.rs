// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the registry implementation.
//!
//! This module contains [`Registry`], the concrete implementation of the
//! `ConfigRegistry` trait, its builder, the format driver registry and the
//! process-wide instance.

pub mod driver_registry;
pub mod global;
pub mod registry;

// Re-export commonly used types
pub use driver_registry::{driver_identifier, DriverFactory, DriverRegistry, DRIVER_NAMESPACE};
pub use global::global;
pub use registry::{Registry, RegistryBuilder, NATIVE_EXTENSION};

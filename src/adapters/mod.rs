// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of the ports.
//!
//! This module contains the stock format drivers, the local filesystem, and the
//! conventional lazy-load path strategy.

pub mod json_parser;
pub mod local_fs;
pub mod module_path;
#[cfg(feature = "toml")]
pub mod toml_parser;
#[cfg(feature = "yaml")]
pub mod yaml_parser;

pub use json_parser::JsonParser;
pub use local_fs::LocalFileSystem;
pub use module_path::{ConventionalPathStrategy, NoModule, StaticModuleResolver};
#[cfg(feature = "toml")]
pub use toml_parser::TomlParser;
#[cfg(feature = "yaml")]
pub use yaml_parser::YamlParser;

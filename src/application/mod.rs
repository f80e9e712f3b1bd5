// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports for dependency inversion.
//!
//! - [`port`]: Trait definitions (interfaces) implemented by the host
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The controller only talks to the outside world through these ports

pub mod port;

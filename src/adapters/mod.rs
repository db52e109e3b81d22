//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies. Each sub-module groups adapters by
//! infrastructure concern.
//!
//! Adapter categories:
//! - `chain`: Sepolia wallet and contract access via alloy-rs
//! - `terminal`: notices, rendering and the interactive shell

pub mod chain;
pub mod terminal;

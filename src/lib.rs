//! Taskwise: owner-scoped task management with AI task suggestions.
//!
//! This crate provides personal task lists keyed by an authenticated owner,
//! aggregate views over those lists, and a topic-driven task generator that
//! degrades to a fixed suggestion list when the external text model is
//! unavailable.
//!
//! # Architecture
//!
//! Taskwise follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`config`]: Layered configuration from defaults, TOML, and environment
//! - [`generation`]: Prompting, parsing, and fallback for task suggestions
//! - [`task`]: Task records, ownership checks, statistics, and grouping

pub mod config;
pub mod generation;
pub mod task;

//! Owner-scoped task management.
//!
//! Every task belongs to exactly one owner. Listing, lookup, update, and
//! deletion only ever see the caller's own tasks, and a task that belongs to
//! someone else is indistinguishable from one that does not exist. Batch
//! creation validates every entry before writing and is stored as a unit.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

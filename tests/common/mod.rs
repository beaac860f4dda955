//! Common test utilities and helpers
//!
//! - `app` - the real router over a `MemoryStore`, driven with `oneshot`
//! - `auth_helpers` - account creation shortcuts
//! - `database` - Postgres pool and migrations, when `DATABASE_URL` is set
//! - `assertions` - status/body assertion macros

#![allow(dead_code)]

pub mod app;
pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use app::*;
pub use auth_helpers::*;

//! # Places Rust Backend
//!
//! REST backend for managing places and their weekly opening hours.
//!
//! Besides plain CRUD, the service derives a grouped opening-hours view that
//! compresses a 7-day schedule into human-readable ranges such as
//! "Monday - Friday: 09:00 - 17:00". Interval data is validated on the write
//! path (strict `HH:mm` format, start-before-end ordering with an
//! "until midnight" exception); the grouping is a pure read-side
//! transformation.
//!
//! ## Architecture
//!
//! - [`api`]: identifier newtype and derived view types
//! - [`models`]: domain model (weekday, interval, schedule, place)
//! - [`validation`]: time-format and interval-ordering validators
//! - [`services`]: the grouping engine
//! - [`db`]: repository pattern and high-level place operations
//! - [`http`]: axum HTTP server (behind the `http-server` feature)

pub mod api;
pub mod db;
pub mod models;
pub mod services;
pub mod validation;

#[cfg(feature = "http-server")]
pub mod http;

//! Repository implementations module.
//!
//! Currently a single backend: `local`, an in-memory implementation used for
//! tests and local development. Durable backends plug in behind the same
//! `PlaceRepository` trait.

pub mod local;

pub use local::LocalRepository;

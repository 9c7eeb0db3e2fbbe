//! quizsmith-core: quiz normalization, answer matching and grading.
//!
//! This crate turns loosely-structured generator output into a canonical
//! quiz, grades submitted answers against it, and defines the provider and
//! storage seams the rest of quizsmith builds on.

pub mod editor;
pub mod error;
pub mod generator;
pub mod grading;
pub mod matcher;
pub mod model;
pub mod params;
pub mod prompt;
pub mod results;
pub mod schema;
pub mod statistics;
pub mod storage;
pub mod text;
pub mod traits;

//! # Config Crate
//!
//! Centralized configuration constants for the face-set import pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{hardness_to_shininess, DEFAULT_DIFFUSE, MAX_CLIPPED_POINTS};
//!
//! // Clipped polygons never exceed a pentagon
//! assert_eq!(MAX_CLIPPED_POINTS, 5);
//!
//! // Render hardness maps onto the [0, 128] shininess range
//! assert_eq!(hardness_to_shininess(127), 32.0);
//! assert_eq!(DEFAULT_DIFFUSE[3], 1.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain values, usable from every crate
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

//! Utility functions for code generation, URL validation and rendering.
//!
//! - [`code_generator`] - Short code generation and custom code validation
//! - [`url_validator`] - Destination URL checks
//! - [`short_url`] - Short URL composition from a base address

pub mod code_generator;
pub mod short_url;
pub mod url_validator;

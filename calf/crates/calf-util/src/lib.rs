//! calf-util - Shared infrastructure for the Calf front end.
//!
//! This crate holds the types every pipeline stage agrees on, chiefly
//! [`Position`], the source-location triple that travels on every token
//! and composite form.

pub mod span;

pub use span::Position;

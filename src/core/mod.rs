//! Core data types for gesture recognition.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Point`](point::Point): A 2-D pointer position
//! - [`Direction`](direction::Direction): One of the 8 cardinal and diagonal directions
//! - [`Stroke`](stroke::Stroke): A run of points travelling in one direction
//! - [`Gesture`](gesture::Gesture): An ordered sequence of directions
//!
//! ## Direction Symbols
//!
//! | Symbol | Direction | Symbol | Direction |
//! |--------|-----------|--------|-----------|
//! | U      | up        | D      | down      |
//! | L      | left      | R      | right     |
//! | UL     | up-left   | UR     | up-right  |
//! | DL     | down-left | DR     | down-right|
//!
//! Coordinates follow screen conventions: `y` grows downward, so moving to a
//! smaller `y` is "up".

pub mod direction;
pub mod gesture;
pub mod point;
pub mod stroke;

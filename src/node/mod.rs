//! The canonical shape of a compiled chatbot node and the map that holds them.

pub mod kind;
pub mod map;
pub mod model;

pub use kind::*;
pub use map::*;
pub use model::*;

// src/presentation/mod.rs

// The pure-logic half of the presentation adapter: where producers sit on
// screen, how clicks become purchases, and how frames become ticks.
// Painting stays with the host; it only reads `Snapshot`s.

pub mod input;
pub mod layout;
pub mod session;

pub use input::*;
pub use layout::*;
pub use session::*;

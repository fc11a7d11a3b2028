pub mod cost;
pub mod product;
pub mod rotation;
pub mod stoch;

pub use cost::*;
pub use product::*;
pub use rotation::*;
pub use stoch::*;

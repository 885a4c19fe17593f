pub mod encode;
pub mod preview;
pub mod restore;

pub use encode::*;
pub use preview::*;
pub use restore::*;

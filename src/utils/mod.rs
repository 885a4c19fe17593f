pub mod dir_util;
pub mod name_codec;

pub use dir_util::*;
pub use name_codec::*;

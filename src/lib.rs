mod bcodec;
mod constant;
mod error;
mod utils;

pub use crate::error::Error;

pub use crate::bcodec::BDecoder;
pub use crate::bcodec::BValue;
pub use crate::bcodec::DeepFinder;
pub use crate::bcodec::RawFinder;

pub use crate::constant::MAX_NESTING_DEPTH;

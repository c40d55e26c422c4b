//! Text codecs for the configuration values that have both a structured and a
//! single-string form.

pub mod address;
pub mod duration;
pub mod options;

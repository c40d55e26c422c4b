pub mod range;
pub mod variant;

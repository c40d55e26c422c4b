//! Proxy profile model, codecs and validation.
//!
//! ```text
//! ProxyConfig | none ──flatten──▶ EditSession ──submit──▶ unflatten ──▶ validate
//!                                                              │
//!                              accepted ProxyConfig ◀──────────┴──▶ field errors
//! wire document ──lower──▶ draft ──▶ validate
//! ```

pub mod codec;
mod draft;
mod error;
mod flatten;
mod loader;
mod lower;
pub mod paths;
mod session;
mod store;
#[cfg(test)]
mod tests;
pub mod types;
pub mod validation;
mod variant;

pub use draft::*;
pub use error::*;
pub use flatten::{FlatProfile, flatten, read_draft, unflatten};
pub use loader::{DocumentFormat, LoadError, load_profile, load_spec};
pub use lower::{draft_from_spec, lower_profile};
pub use session::EditSession;
pub use store::{ConfigStore, DirStore, MemoryStore, SaveMode, StoreError};
pub use types::ProxyConfig;
pub use validation::{ValidationErrors, validate, validate_config};
pub use variant::{Tagged, VariantSlot, resolve};

mod report;
mod validate;
mod validation_ctx;
pub mod validator;

pub use report::*;
pub use validate::{validate, validate_config};
pub(crate) use validate::validate_into;
pub use validation_ctx::{ValidationCtx, ValidationErrors};

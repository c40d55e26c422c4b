mod address;
mod checker;
mod flat;
mod lb_policy;
mod protocol;
mod proxy_config;
pub mod specification;

pub use address::*;
pub use checker::*;
pub use flat::*;
pub use lb_policy::*;
pub use protocol::*;
pub use proxy_config::*;
pub use specification::*;

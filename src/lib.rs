pub mod constants;

mod allow_list;
mod allowed_headers;
mod allowed_methods;
mod context;
mod decision;
mod deployment;
mod exposed_headers;
mod gate;
mod headers;
mod options;

pub use allow_list::{AllowList, OriginDecision};
pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use decision::{CorsDecision, PreflightOutcome, SimpleOutcome};
pub use deployment::{fzl_allow_list, fzl_options, gate};
pub use exposed_headers::ExposedHeaders;
pub use gate::OriginGate;
pub use headers::Headers;
pub use options::{GateOptions, OptionsError};

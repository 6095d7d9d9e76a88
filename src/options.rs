use crate::allow_list::AllowList;
use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use thiserror::Error;

/// Immutable configuration consumed by [`crate::OriginGate::new`].
#[derive(Clone, Debug)]
pub struct GateOptions {
    pub allowed_origins: AllowList,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub credentials: bool,
    /// Seconds a preflight result may be cached; emitted as
    /// `Access-Control-Max-Age` when set.
    pub max_age: Option<u64>,
    /// When true, an answered preflight is still passed down the stack
    /// instead of being terminated by the adapter.
    pub preflight_continue: bool,
    pub preflight_status: u16,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            allowed_origins: AllowList::default(),
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            credentials: false,
            max_age: None,
            preflight_continue: false,
            preflight_status: 204,
        }
    }
}

/// Configuration rejected by [`GateOptions::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error(
        "allow-list entry {entry:?} must be non-empty ASCII without whitespace or control characters"
    )]
    InvalidOriginEntry { entry: String },
    #[error("method {method:?} is not a valid HTTP token")]
    InvalidMethod { method: String },
    #[error("header name {name:?} is not a valid HTTP token")]
    InvalidHeaderName { name: String },
    #[error("preflight status {status} is outside the 2xx success range")]
    InvalidPreflightStatus { status: u16 },
}

impl GateOptions {
    pub(crate) fn validate(&self) -> Result<(), OptionsError> {
        for origin in self.allowed_origins.iter() {
            if !is_plausible_origin(origin) {
                return Err(OptionsError::InvalidOriginEntry {
                    entry: origin.to_string(),
                });
            }
        }

        for method in self.methods.values() {
            if !is_http_token(method) {
                return Err(OptionsError::InvalidMethod {
                    method: method.clone(),
                });
            }
        }

        if let AllowedHeaders::List(names) = &self.allowed_headers {
            for name in names {
                if !is_http_token(name) {
                    return Err(OptionsError::InvalidHeaderName { name: name.clone() });
                }
            }
        }

        for name in self.exposed_headers.values() {
            if !is_http_token(name) {
                return Err(OptionsError::InvalidHeaderName { name: name.clone() });
            }
        }

        if !(200..=299).contains(&self.preflight_status) {
            return Err(OptionsError::InvalidPreflightStatus {
                status: self.preflight_status,
            });
        }

        Ok(())
    }
}

/// Entries are matched verbatim, so validation only rejects values that no
/// browser could ever send in an `Origin` header.
fn is_plausible_origin(value: &str) -> bool {
    !value.is_empty()
        && value.is_ascii()
        && !value
            .bytes()
            .any(|byte| byte.is_ascii_whitespace() || byte.is_ascii_control())
}

fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

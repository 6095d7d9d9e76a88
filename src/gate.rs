use crate::allowed_headers::AllowedHeaders;
use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::decision::{CorsDecision, PreflightOutcome, SimpleOutcome};
use crate::headers::HeaderCollection;
use crate::options::{GateOptions, OptionsError};

/// Request gate over an exact-match origin allow-list.
///
/// Construction validates the options once; afterwards the gate is immutable
/// and any number of requests may be evaluated concurrently through a shared
/// reference.
pub struct OriginGate {
    options: GateOptions,
}

impl OriginGate {
    pub fn new(options: GateOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &GateOptions {
        &self.options
    }

    /// Evaluate one request. Total: every input maps to a decision and no
    /// request-time path can fail.
    ///
    /// Any `OPTIONS` request from an allowed origin is answered as a
    /// preflight; other methods receive headers for the downstream response.
    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let verdict = self.options.allowed_origins.decide(request.origin);
        let Some(origin) = request.origin.filter(|_| verdict.is_allowed()) else {
            return CorsDecision::Denied;
        };

        if request.method.eq_ignore_ascii_case(method::OPTIONS) {
            CorsDecision::Preflight(self.preflight_outcome(origin, request))
        } else {
            CorsDecision::Simple(self.simple_outcome(origin))
        }
    }

    fn preflight_outcome(
        &self,
        origin: &str,
        request: &RequestContext<'_>,
    ) -> PreflightOutcome {
        let mut headers = self.origin_headers(origin);
        self.append_credentials(&mut headers);
        if let Some(value) = self.options.methods.header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        self.append_allowed_headers(&mut headers, request);
        if let Some(max_age) = self.options.max_age {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, max_age.to_string());
        }
        self.append_exposed_headers(&mut headers);

        PreflightOutcome {
            headers: headers.into_headers(),
            status: self.options.preflight_status,
            end_response: !self.options.preflight_continue,
        }
    }

    fn simple_outcome(&self, origin: &str) -> SimpleOutcome {
        let mut headers = self.origin_headers(origin);
        self.append_credentials(&mut headers);
        self.append_exposed_headers(&mut headers);

        SimpleOutcome {
            headers: headers.into_headers(),
        }
    }

    /// The reflected value depends on the request, so `Vary: Origin` always
    /// accompanies it.
    fn origin_headers(&self, origin: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.add_vary(header::ORIGIN);
        headers
    }

    fn append_credentials(&self, headers: &mut HeaderCollection) {
        if self.options.credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
    }

    fn append_allowed_headers(
        &self,
        headers: &mut HeaderCollection,
        request: &RequestContext<'_>,
    ) {
        match &self.options.allowed_headers {
            AllowedHeaders::MirrorRequest => {
                headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
                if let Some(requested) = request.access_control_request_headers
                    && !requested.trim().is_empty()
                {
                    headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, requested);
                }
            }
            AllowedHeaders::List(values) if values.is_empty() => {}
            AllowedHeaders::List(values) => {
                headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, values.join(","));
            }
        }
    }

    fn append_exposed_headers(&self, headers: &mut HeaderCollection) {
        if let Some(value) = self.options.exposed_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

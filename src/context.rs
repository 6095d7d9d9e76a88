/// Borrowed view of the facts of one incoming request.
///
/// Header absence is represented as `None`; an adapter must never substitute
/// an empty string for a header that was not sent.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    /// Value of the `Origin` request header, when present.
    pub origin: Option<&'a str>,
    /// Value of `Access-Control-Request-Headers` on a preflight, when present.
    pub access_control_request_headers: Option<&'a str>,
}

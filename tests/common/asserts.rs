use origin_gate::constants::header;
use origin_gate::{CorsDecision, Headers};

use super::headers::header_value;

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(outcome) => outcome.headers,
        other => panic!("expected simple decision, got {other:?}"),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16, bool) {
    match decision {
        CorsDecision::Preflight(outcome) => {
            (outcome.headers, outcome.status, outcome.end_response)
        }
        other => panic!("expected preflight decision, got {other:?}"),
    }
}

pub fn assert_denied(decision: CorsDecision) {
    match decision {
        CorsDecision::Denied => {}
        other => panic!("expected denied decision, got {other:?}"),
    }
}

pub fn assert_vary_eq<'a, I>(headers: &Headers, expected: I)
where
    I: IntoIterator<Item = &'a str>,
{
    let expected: Vec<&str> = expected.into_iter().collect();
    let actual: Vec<String> = header_value(headers, header::VARY)
        .map(|value| {
            value
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect()
        })
        .unwrap_or_default();

    assert_eq!(actual, expected, "unexpected Vary entries");
}

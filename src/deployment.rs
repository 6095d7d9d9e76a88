use once_cell::sync::Lazy;

use crate::allow_list::AllowList;
use crate::gate::OriginGate;
use crate::options::GateOptions;

/// Origins granted cross-origin access in the FZL deployment.
///
/// Reproduced exactly as configured in production; matching is byte-for-byte,
/// so every entry carries its scheme and port.
pub fn fzl_allow_list() -> AllowList {
    AllowList::new([
        // FZL H/O
        "http://103.147.163.46:3005",
        "http://103.147.163.46:4010",
        "http://103.147.163.46:3000",
        "http://103.147.163.46:4025",
        "http://103.147.163.46:4026",
        // Development
        "http://localhost:3005",
        "http://localhost:4010",
        "http://localhost:3000",
        "http://localhost:4025",
        "http://localhost:4026",
        // Office Server PC
        "http://192.168.10.154:3005",
        "http://192.168.10.154:4010",
        "http://192.168.10.154:3000",
        "http://192.168.10.154:4025",
        "http://192.168.10.154:4026",
        // RBR LAPTOP
        "http://192.168.10.78:4010",
        // RBR Home
        "http://192.168.1.108:4175",
    ])
}

/// Deployment posture: the allow-list above with the stock middleware
/// defaults (reflected origin, standard methods, mirrored request headers,
/// preflight answered with 204).
pub fn fzl_options() -> GateOptions {
    GateOptions {
        allowed_origins: fzl_allow_list(),
        ..GateOptions::default()
    }
}

static GATE: Lazy<OriginGate> = Lazy::new(|| {
    OriginGate::new(fzl_options()).expect("deployment options are valid")
});

/// Process-wide gate over the deployment allow-list, built on first use and
/// handed out by reference.
pub fn gate() -> &'static OriginGate {
    &GATE
}

#[cfg(test)]
#[path = "deployment_test.rs"]
mod deployment_test;

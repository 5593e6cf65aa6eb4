#![deny(missing_docs)]

//! # curl Rendering
//!
//! Shell commands reproducing a step, for copy-paste into a terminal.

use crate::cases::Step;

/// Renders `step` as a multi-line `curl` command against `base_url`.
///
/// Every argument is single-quoted for POSIX shells.
pub fn build_curl(step: &Step, base_url: &str) -> String {
    let url = format!("{base_url}{}", step.url);
    let mut parts = vec![format!("curl -X {} {}", step.method, shell_quote(&url))];

    for (name, value) in &step.headers {
        parts.push(format!("  -H {}", shell_quote(&format!("{name}: {value}"))));
    }

    if !step.cookies.is_empty() {
        let cookie = step
            .cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ");
        parts.push(format!("  -H {}", shell_quote(&format!("Cookie: {cookie}"))));
    }

    if let Some(body) = &step.body {
        parts.push("  -H 'Content-Type: application/json'".to_string());
        parts.push(format!("  -d {}", shell_quote(&body.to_string())));
    }

    parts.join(" \\\n")
}

/// Wraps `text` in single quotes; embedded quotes become `'\''`.
fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

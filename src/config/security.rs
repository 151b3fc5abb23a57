use crate::errors::CostDashError;

/// Display strings end up in the generated HTML page.
const MARKUP_PATTERNS: &[&str] = &[
    "<script",
    "<iframe",
    "javascript:",
    "vbscript:",
    "data:text/html",
    "onerror=",
    "onload=",
];

/// Sections whose strings are rendered into output. `source` and `output`
/// hold paths and URLs and are not checked.
const RENDERED_SECTIONS: &[&str] = &["display", "server"];

/// Reject configs whose rendered strings contain markup or script URIs.
pub fn validate_security_patterns(value: &serde_yaml::Value) -> Result<(), CostDashError> {
    let serde_yaml::Value::Mapping(map) = value else {
        return Ok(());
    };
    RENDERED_SECTIONS
        .iter()
        .filter_map(|section| map.get(*section).map(|v| (section.to_string(), v)))
        .try_for_each(|(path, v)| scan(v, path))
}

fn scan(value: &serde_yaml::Value, path: String) -> Result<(), CostDashError> {
    use serde_yaml::Value;

    match value {
        Value::String(s) => {
            let lower = s.to_lowercase();
            let data_uri = lower.trim_start().starts_with("data:").then_some(&"data:");
            match MARKUP_PATTERNS.iter().find(|p| lower.contains(*p)).or(data_uri) {
                Some(pattern) => Err(CostDashError::Config(format!(
                    "Markup pattern '{}' found at config path: {}",
                    pattern, path
                ))),
                None => Ok(()),
            }
        }
        Value::Mapping(map) => map.iter().try_for_each(|(k, v)| {
            let key = k.as_str().unwrap_or("?");
            scan(v, format!("{}.{}", path, key))
        }),
        Value::Sequence(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(i, v)| scan(v, format!("{}[{}]", path, i))),
        _ => Ok(()),
    }
}

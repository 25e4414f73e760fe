//! Credential resolution
//!
//! Order: explicit config value, then the named environment variable, then
//! absent. Empty strings count as absent at every step.

/// Resolve a credential from the process environment.
pub fn resolve_credential(explicit: Option<&str>, env_name: &str) -> Option<String> {
    resolve_with(explicit, env_name, |name| std::env::var(name).ok())
}

/// Resolve a credential with a caller-supplied environment lookup.
pub fn resolve_with<F>(explicit: Option<&str>, env_name: &str, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = explicit.map(str::trim).filter(|v| !v.is_empty()) {
        return Some(value.to_string());
    }
    if env_name.is_empty() {
        return None;
    }
    lookup(env_name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

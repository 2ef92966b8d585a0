//! Deployment base path for client-side routing.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/cargame` when the bundle
/// is served from a subdirectory), the router mounts below it. Local builds
/// without `PUBLIC_URL` route from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        None
    } else if base.starts_with('/') {
        Some(base.to_string())
    } else {
        Some(format!("/{base}"))
    }
}

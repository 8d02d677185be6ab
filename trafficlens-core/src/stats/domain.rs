/// Reduce a referer URL to a bare, lowercase host.
///
/// `https://www.Example.org:8443/path?q` becomes `example.org`. Returns
/// `None` for `-`, the empty string, or anything without a dot once the
/// scheme, path, port and `www.` prefix are gone.
pub fn extract_domain(referer: &str) -> Option<String> {
    if referer.is_empty() || referer == "-" {
        return None;
    }

    let host = strip_prefix_ignore_case(referer, "https://")
        .or_else(|| strip_prefix_ignore_case(referer, "http://"))
        .unwrap_or(referer);
    let host = host.split('/').next().unwrap_or(host);
    let host = host.split(':').next().unwrap_or(host);
    let host = strip_prefix_ignore_case(host, "www.").unwrap_or(host);
    let host = host.to_lowercase();

    host.contains('.').then_some(host)
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}

/// `about` becomes `/about`; paths that already start with `/` are unchanged.
pub fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

use crate::shared::Result;
use anyhow::Context;
use reqwest::Url;

/// Parses the radar server base URL
///
/// Only `http`/`https` are accepted. The path always ends with `/` so
/// endpoints are joined below it instead of replacing its last segment.
pub fn parse_server_url(server: &str) -> Result<Url> {
    let mut url = Url::parse(server.trim())
        .with_context(|| format!("Invalid server URL: {}", server))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!(
            "Invalid server URL: {}\nReason: only http and https are supported",
            server
        );
    }
    if url.host_str().is_none() {
        anyhow::bail!("Invalid server URL: {}\nReason: missing host", server);
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Builds `<base>/<endpoint>?<pairs>` with every value percent-encoded
pub fn endpoint_url(base: &Url, endpoint: &str, pairs: &[(&str, String)]) -> Result<Url> {
    let mut url = base
        .join(endpoint)
        .with_context(|| format!("Failed to build {} URL", endpoint))?;
    url.query_pairs_mut()
        .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
    Ok(url)
}

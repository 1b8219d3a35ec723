use url::Url;

pub const UNKNOWN_SOURCE: &str = "Unknown Source";

/// Host of `url` without a leading `www.`, or [`UNKNOWN_SOURCE`] when there is none.
pub fn source_domain(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .host_str()
                .map(|host| host.strip_prefix("www.").unwrap_or(host).to_string())
        })
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string())
}

// ABOUTME: Fetches a spell page over HTTP with a single blocking GET.
// ABOUTME: Validates the URL, fails on non-2xx, and decodes the body using the declared or detected charset.

use tracing::info;

use crate::error::SpellError;
use crate::options::FetchOptions;

/// Fetches `url` and returns the decoded page text. No retries.
pub fn fetch_html(url: &str, opts: &FetchOptions) -> Result<String, SpellError> {
    let parsed = url::Url::parse(url).map_err(|e| SpellError::invalid_url(url, e.to_string()))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(SpellError::invalid_url(url, "scheme must be http or https"));
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(opts.timeout)
        .user_agent(opts.user_agent.as_str())
        .build()
        .map_err(|e| SpellError::network(url, e))?;

    let mut request = client.get(parsed);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    let response = request
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| SpellError::network(url, e))?;
    let status = response.status();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.bytes().map_err(|e| SpellError::network(url, e))?;

    info!(url, status = status.as_u16(), bytes = body.len(), "fetched page");
    Ok(decode_body(&body, content_type.as_deref()))
}

/// Decode body bytes using the charset from the content-type header, or detection.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(encoding) = content_type
        .and_then(extract_charset)
        .and_then(|c| encoding_rs::Encoding::for_label(c.as_bytes()))
    {
        let (decoded, _, _) = encoding.decode(body);
        return decoded.into_owned();
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from a Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .to_lowercase()
        .split(';')
        .find_map(|part| {
            part.trim()
                .strip_prefix("charset=")
                .map(|c| c.trim_matches('"').trim_matches('\'').to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_from_header() {
        assert_eq!(
            extract_charset("text/html; charset=ISO-8859-1"),
            Some("iso-8859-1".to_string())
        );
        assert_eq!(
            extract_charset("text/html;charset=\"utf-8\""),
            Some("utf-8".to_string())
        );
        assert_eq!(extract_charset("text/html"), None);
    }

    #[test]
    fn decodes_latin1_when_declared() {
        let body = b"Flammensto\xdf";
        assert_eq!(
            decode_body(body, Some("text/html; charset=iso-8859-1")),
            "Flammenstoß"
        );
    }

    #[test]
    fn utf8_without_header() {
        let body = "<p>Frostbiß</p>".as_bytes();
        assert_eq!(decode_body(body, None), "<p>Frostbiß</p>");
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = fetch_html("ftp://example.com/druid.html", &FetchOptions::default()).unwrap_err();
        assert!(err.is_invalid_url());
    }

    #[test]
    fn rejects_garbage_url() {
        let err = fetch_html("not a url", &FetchOptions::default()).unwrap_err();
        assert!(err.is_invalid_url());
    }
}

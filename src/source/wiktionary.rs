//! Wiktionary API client
//!
//! Fetches the first section of a word's page as wikitext and extracts the
//! synonym templates from it. One blocking request per lookup, no retries.

use super::{SynTemplate, SynonymSource};
use crate::error::SourceError;
use reqwest::blocking::{Client, Request};
use serde::Deserialize;
use tracing::debug;

/// English Wiktionary's MediaWiki API
pub const DEFAULT_ENDPOINT: &str = "https://en.wiktionary.org/w/api.php";

const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (synonym lookup)"
);

/// `action=parse` response, reduced to the fields we read
#[derive(Debug, Default, Deserialize)]
struct ParseResponse {
    #[serde(default)]
    parse: Option<ParsedPage>,
}

#[derive(Debug, Default, Deserialize)]
struct ParsedPage {
    #[serde(default)]
    wikitext: Option<Wikitext>,
}

#[derive(Debug, Default, Deserialize)]
struct Wikitext {
    #[serde(rename = "*", default)]
    content: Option<String>,
}

/// Pull `parse.wikitext.*` out of a response body
///
/// Missing keys (for example the `error` object returned for an unknown page)
/// give empty markup rather than an error.
///
/// # Errors
///
/// Returns `SourceError::Decode` if the body is not JSON of the expected shape.
pub fn markup_from_response(body: &str) -> Result<String, SourceError> {
    let response: ParseResponse = serde_json::from_str(body)?;
    Ok(response
        .parse
        .and_then(|page| page.wikitext)
        .and_then(|text| text.content)
        .unwrap_or_default())
}

/// Blocking client for one Wiktionary endpoint and language
pub struct WiktionaryClient {
    http: Client,
    endpoint: String,
    template: SynTemplate,
}

impl WiktionaryClient {
    /// Create a client for `endpoint` extracting `{{syn|<language>|...}}`
    ///
    /// # Errors
    ///
    /// Returns an error if the language code is unusable or the HTTP client
    /// cannot be built.
    pub fn new(endpoint: &str, language: &str) -> Result<Self, SourceError> {
        let template = SynTemplate::new(language)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            template,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn language(&self) -> &str {
        self.template.language()
    }

    /// Build the lookup request for `word` without sending it
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL.
    pub fn request(&self, word: &str) -> Result<Request, SourceError> {
        let request = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("action", "parse"),
                ("page", word),
                ("format", "json"),
                ("prop", "wikitext"),
                ("section", "1"),
            ])
            .build()?;
        Ok(request)
    }
}

impl SynonymSource for WiktionaryClient {
    fn fetch(&self, word: &str) -> Result<Vec<String>, SourceError> {
        let request = self.request(word)?;
        debug!(word, url = %request.url(), "querying wiktionary");

        let response = self.http.execute(request)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let markup = markup_from_response(&body)?;
        let synonyms = self.template.extract(&markup);

        debug!(word, found = synonyms.len(), "wiktionary lookup done");
        Ok(synonyms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn markup_from_full_response() {
        let body = r#"{"parse":{"title":"quick","pageid":1,"wikitext":{"*":"{{syn|en|fast}}"}}}"#;
        assert_eq!(markup_from_response(body).unwrap(), "{{syn|en|fast}}");
    }

    #[test]
    fn missing_page_is_empty_markup() {
        let body = r#"{"error":{"code":"missingtitle","info":"The page you specified doesn't exist."}}"#;
        assert_eq!(markup_from_response(body).unwrap(), "");
    }

    #[test]
    fn missing_wikitext_is_empty_markup() {
        assert_eq!(markup_from_response(r#"{"parse":{}}"#).unwrap(), "");
        assert_eq!(markup_from_response(r#"{"parse":{"wikitext":{}}}"#).unwrap(), "");
    }

    #[test]
    fn non_json_body_is_decode_error() {
        assert!(matches!(
            markup_from_response("<html>busy</html>"),
            Err(SourceError::Decode(_))
        ));
    }

    #[test]
    fn wrong_shape_is_decode_error() {
        assert!(matches!(
            markup_from_response(r#"{"parse":"nope"}"#),
            Err(SourceError::Decode(_))
        ));
    }

    #[test]
    fn request_carries_parse_parameters() {
        let client = WiktionaryClient::new(DEFAULT_ENDPOINT, "uk").unwrap();
        let request = client.request("швидкий").unwrap();
        let url = request.url();

        assert_eq!(url.host_str(), Some("en.wiktionary.org"));
        assert_eq!(url.path(), "/w/api.php");

        let params: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            params,
            vec![
                ("action".to_string(), "parse".to_string()),
                ("page".to_string(), "швидкий".to_string()),
                ("format".to_string(), "json".to_string()),
                ("prop".to_string(), "wikitext".to_string()),
                ("section".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn client_reports_configuration() {
        let client = WiktionaryClient::new("http://localhost:9/w/api.php", "en").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:9/w/api.php");
        assert_eq!(client.language(), "en");
    }

    #[test]
    fn invalid_endpoint_fails_to_build_request() {
        let client = WiktionaryClient::new("not a url", "en").unwrap();
        assert!(matches!(client.request("word"), Err(SourceError::Network(_))));
    }

    #[test]
    fn unreachable_endpoint_is_network_error() {
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client =
            WiktionaryClient::new(&format!("http://127.0.0.1:{port}/w/api.php"), "en").unwrap();
        assert!(matches!(client.fetch("word"), Err(SourceError::Network(_))));
    }

    #[test]
    fn fetch_extracts_synonyms_from_reply() {
        let body = r#"{"parse":{"wikitext":{"*":"{{syn|en|a|b}}\n{{syn|de|x}}\n{{syn|en| b |c}}"}}}"#;
        let endpoint = serve_once("200 OK", body);
        let client = WiktionaryClient::new(&endpoint, "en").unwrap();

        assert_eq!(client.fetch("word").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn fetch_maps_error_status() {
        let endpoint = serve_once("503 Service Unavailable", "busy");
        let client = WiktionaryClient::new(&endpoint, "en").unwrap();

        assert!(matches!(client.fetch("word"), Err(SourceError::Status(503))));
    }

    /// Answer a single HTTP request with a fixed reply, returning the endpoint
    fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                line.clear();
            }
            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
        });

        format!("http://127.0.0.1:{port}/w/api.php")
    }
}

//! LanguageTool HTTP client

use serde::Deserialize;
use std::time::Duration;

use super::{ExternalMatch, GrammarChecker};
use crate::api::config::LanguageToolConfig;
use crate::error::CheckerError;

/// Blocking client for a LanguageTool server's `/v2` API
pub struct LanguageToolClient {
    client: reqwest::blocking::Client,
    base_url: String,
    language: String,
    timeout_ms: u64,
}

impl LanguageToolClient {
    /// Build a client without contacting the server
    pub fn new(settings: &LanguageToolConfig) -> Result<Self, CheckerError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .user_agent(format!("corrige/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CheckerError::Unavailable(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: settings.url.trim_end_matches('/').to_string(),
            language: settings.language.clone(),
            timeout_ms: settings.timeout_ms,
        })
    }

    /// Build a client and verify the server supports the configured language
    pub fn connect(settings: &LanguageToolConfig) -> Result<Self, CheckerError> {
        let client = Self::new(settings)?;
        client.probe()?;
        Ok(client)
    }

    fn probe(&self) -> Result<(), CheckerError> {
        let body = self.read(self.client.get(format!("{}/v2/languages", self.base_url)))?;
        let languages: Vec<Language> = serde_json::from_str(&body)
            .map_err(|e| CheckerError::InvalidResponse(e.to_string()))?;

        let wanted = self.language.to_lowercase();
        if languages
            .iter()
            .any(|l| l.long_code.to_lowercase() == wanted || l.code.to_lowercase() == wanted)
        {
            Ok(())
        } else {
            Err(CheckerError::Unavailable(format!(
                "language {} not supported by server",
                self.language
            )))
        }
    }

    fn read(&self, request: reqwest::blocking::RequestBuilder) -> Result<String, CheckerError> {
        let response = request.send().map_err(|e| self.transport_error(e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(CheckerError::Http(format!("server answered HTTP {status}")));
        }
        response.text().map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, e: reqwest::Error) -> CheckerError {
        if e.is_timeout() {
            CheckerError::Timeout(self.timeout_ms)
        } else {
            CheckerError::Http(e.to_string())
        }
    }
}

impl GrammarChecker for LanguageToolClient {
    fn name(&self) -> &str {
        "LanguageTool"
    }

    fn check(&self, text: &str) -> Result<Vec<ExternalMatch>, CheckerError> {
        let request = self
            .client
            .post(format!("{}/v2/check", self.base_url))
            .form(&[("text", text), ("language", self.language.as_str())]);
        let body = self.read(request)?;
        parse_check_response(&body)
    }
}

#[derive(Debug, Deserialize)]
struct Language {
    #[serde(default)]
    code: String,
    #[serde(rename = "longCode", default)]
    long_code: String,
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<RawMatch>,
}

#[derive(Debug, Deserialize)]
struct RawMatch {
    #[serde(default)]
    message: String,
    #[serde(default)]
    replacements: Vec<Replacement>,
    offset: usize,
    length: usize,
    #[serde(default)]
    context: Option<Context>,
    #[serde(default)]
    rule: Option<RawRule>,
}

#[derive(Debug, Deserialize)]
struct Replacement {
    value: String,
}

#[derive(Debug, Deserialize)]
struct Context {
    text: String,
    offset: usize,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    #[serde(default)]
    id: String,
    #[serde(default)]
    category: Option<Category>,
}

#[derive(Debug, Deserialize)]
struct Category {
    #[serde(default)]
    id: String,
}

/// Decode a `/v2/check` response body
fn parse_check_response(body: &str) -> Result<Vec<ExternalMatch>, CheckerError> {
    let response: CheckResponse =
        serde_json::from_str(body).map_err(|e| CheckerError::InvalidResponse(e.to_string()))?;

    Ok(response
        .matches
        .into_iter()
        .map(|m| {
            let (rule_id, category) = match m.rule {
                Some(rule) => (rule.id, rule.category.map(|c| c.id).unwrap_or_default()),
                None => (String::new(), String::new()),
            };
            let (context, offset_in_context) = match m.context {
                Some(ctx) => (ctx.text, ctx.offset),
                None => (String::new(), 0),
            };
            ExternalMatch {
                category,
                rule_id,
                message: m.message,
                context,
                offset: m.offset,
                offset_in_context,
                error_length: m.length,
                replacements: m.replacements.into_iter().map(|r| r.value).collect(),
            }
        })
        .collect())
}

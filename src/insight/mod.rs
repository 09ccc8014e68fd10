pub mod error;

pub use error::{Error, ErrorKind};

use crate::config::InsightConfig;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// The AI-generated quote/advice pair for one month. Produced fresh on
/// every window change, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyInsight {
    pub month: String,
    pub quote: String,
    pub advice: String,
}

pub const FALLBACK_QUOTE: &str = "成功的秘诀在于每天的点滴努力。";
pub const FALLBACK_ADVICE: &str = "保持专注，哪怕是在忙碌的节日期间，也要留一点时间给自己静思。";

/// The fixed insight substituted for any fetch failure. Its month field
/// always equals the requested month name.
pub fn fallback_insight(month_name: &str) -> MonthlyInsight {
    MonthlyInsight {
        month: month_name.to_owned(),
        quote: FALLBACK_QUOTE.to_owned(),
        advice: FALLBACK_ADVICE.to_owned(),
    }
}

static AGENT: Lazy<ureq::Agent> = Lazy::new(|| ureq::AgentBuilder::new().build());

/// Fetches the monthly insight with one round-trip to the generative
/// language service. Every failure cause collapses into the same fallback
/// value; the caller never sees an error state.
pub fn fetch_monthly_insight(config: &InsightConfig, month_name: &str, year: i32) -> MonthlyInsight {
    match request_insight(config, month_name, year) {
        Ok(insight) => insight,
        Err(err) => {
            log::warn!("insight fetch for {}年{} failed: {}", year, month_name, err);
            fallback_insight(month_name)
        }
    }
}

fn request_insight(
    config: &InsightConfig,
    month_name: &str,
    year: i32,
) -> Result<MonthlyInsight, Error> {
    let api_key = config.resolve_api_key().ok_or_else(|| {
        Error::new(
            ErrorKind::MissingApiKey,
            "set insight.api_key in the config file or the GEMINI_API_KEY environment variable",
        )
    })?;

    let url = format!(
        "{}/models/{}:generateContent",
        config.endpoint.trim_end_matches('/'),
        config.model
    );
    let body = build_request(month_name, year);

    let response = AGENT
        .post(&url)
        .set("Content-Type", "application/json")
        .set("x-goog-api-key", &api_key)
        .timeout(config.timeout())
        .send_string(&body.to_string())?;

    let text = response.into_string()?;
    parse_response(&text)
}

/// `generateContent` request body: a Chinese prompt for the given month
/// plus a strict JSON response schema with the three required fields.
fn build_request(month_name: &str, year: i32) -> serde_json::Value {
    let prompt = format!(
        "请为 {}年{} 提供一句励志名言和一条高效办公/生活的建议。\
         特别注意：如果该月包含中国重要的传统节日（如春节、除夕、中秋等），\
         请在建议中体现如何平衡节日休息与个人成长，或给出节日相关的温馨提示。\
         请使用中文回答。",
        year, month_name
    );

    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "month": { "type": "STRING" },
                    "quote": { "type": "STRING" },
                    "advice": { "type": "STRING" }
                },
                "required": ["month", "quote", "advice"]
            }
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

/// Extracts the first candidate text and parses it as a `MonthlyInsight`.
/// Models occasionally wrap JSON output in a markdown fence despite the
/// declared mime type, so fences are stripped before parsing.
fn parse_response(body: &str) -> Result<MonthlyInsight, Error> {
    let envelope: GenerateContentResponse = serde_json::from_str(body)?;

    let text = envelope
        .candidates
        .first()
        .and_then(|candidate| candidate.content.parts.first())
        .map(|part| part.text.as_str())
        .ok_or_else(|| Error::new(ErrorKind::Schema, "response contained no candidate text"))?;

    let text = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    Ok(serde_json::from_str(text)?)
}

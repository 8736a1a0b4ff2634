use serde_json::Value;

use crate::error::SentimentError;
use crate::models::NewsRecord;

/// Buckets an adjusted-sentiment score into its categorical label.
///
/// 250 and -250 belong to the outer buckets.
pub(crate) fn adjusted_label(score: f64) -> &'static str {
    if score >= 250.0 {
        "Super Positive"
    } else if score > 0.0 {
        "Positive"
    } else if score == 0.0 {
        "Neutral"
    } else if score > -250.0 {
        "Negative"
    } else {
        "Super Negative"
    }
}

/// Maps the provider's fixed raw codes; any other code has no label.
pub(crate) fn raw_label(code: f64) -> Option<&'static str> {
    if code == 50.0 {
        Some("Positive")
    } else if code == -50.0 {
        Some("Negative")
    } else if code == 0.0 {
        Some("Neutral")
    } else {
        None
    }
}

/// Coerces a JSON value to f64, accepting numbers and numeric strings.
pub(crate) fn coerce_score(value: &Value) -> Result<f64, SentimentError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| SentimentError::DataType(format!("value out of f64 range: {n}"))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| SentimentError::DataType(format!("expected a numeric sentiment, got \"{s}\""))),
        other => Err(SentimentError::DataType(format!(
            "expected a numeric sentiment, got {other}"
        ))),
    }
}

/// Applies label enrichment to every row in place.
///
/// `adjusted_sentiment` is normalized to a float and its bucket label
/// attached. Mapped raw codes get their label; unmapped codes are left as-is
/// with no label, so the original column never mixes numbers and strings.
pub(crate) fn enrich_rows(rows: &mut [NewsRecord]) -> Result<(), SentimentError> {
    for row in rows.iter_mut() {
        if let Some(value) = &row.adjusted_sentiment {
            let score = coerce_score(value)?;
            row.adjusted_sentiment = Some(Value::from(score));
            row.adjusted_sentiment_label = Some(adjusted_label(score).to_string());
        }
        if let Some(code) = row.raw_sentiment.as_ref().and_then(Value::as_f64) {
            row.raw_sentiment_label = raw_label(code).map(str::to_string);
        }
    }
    Ok(())
}

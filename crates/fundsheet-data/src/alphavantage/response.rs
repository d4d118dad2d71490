//! Validation of Alpha Vantage response bodies.
//!
//! Alpha Vantage reports most failures with HTTP 200 and a JSON body, so a
//! successful status alone says little. Checks run in this order: error
//! message, informational notice, empty document.

use super::function::Function;
use crate::error::{DataError, Result};
use crate::source::Document;
use serde_json::Value;

/// Key carrying a hard API error, e.g. an unknown symbol.
pub const ERROR_MESSAGE_KEY: &str = "Error Message";

/// Key carrying a notice, most often the rate limit message.
pub const INFORMATION_KEY: &str = "Information";

/// Older spelling of the rate limit notice.
pub const NOTE_KEY: &str = "Note";

fn message(value: &Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), ToString::to_string)
}

/// Turn a parsed response body into a document or an upstream error.
pub fn validate_response(function: Function, symbol: &str, body: Value) -> Result<Document> {
    let Value::Object(document) = body else {
        return Err(DataError::UnexpectedResponse {
            function: function.to_string(),
            symbol: symbol.to_string(),
            reason: "body is not a JSON object".to_string(),
        });
    };

    if let Some(error) = document.get(ERROR_MESSAGE_KEY) {
        return Err(DataError::Api {
            function: function.to_string(),
            symbol: symbol.to_string(),
            message: message(error),
        });
    }

    if let Some(notice) = document
        .get(INFORMATION_KEY)
        .or_else(|| document.get(NOTE_KEY))
    {
        return Err(DataError::Information {
            function: function.to_string(),
            symbol: symbol.to_string(),
            message: message(notice),
        });
    }

    if document.is_empty() {
        return Err(DataError::EmptyResponse {
            function: function.to_string(),
            symbol: symbol.to_string(),
        });
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_valid_document() {
        let document = validate_response(
            Function::Overview,
            "IBM",
            json!({"Symbol": "IBM", "PERatio": "22.1"}),
        )
        .unwrap();
        assert_eq!(document.get("Symbol"), Some(&json!("IBM")));
    }

    #[test]
    fn test_error_message() {
        let err = validate_response(
            Function::IncomeStatement,
            "NOPE",
            json!({"Error Message": "Invalid API call."}),
        )
        .unwrap_err();

        match err {
            DataError::Api {
                function,
                symbol,
                message,
            } => {
                assert_eq!(function, "INCOME_STATEMENT");
                assert_eq!(symbol, "NOPE");
                assert_eq!(message, "Invalid API call.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[rstest]
    #[case(json!({"Information": "Thank you for using Alpha Vantage! Our standard API rate limit is 25 requests per day."}))]
    #[case(json!({"Note": "Please consider spreading out your free API requests more sparingly."}))]
    fn test_notice_is_information(#[case] body: Value) {
        let err = validate_response(Function::CashFlow, "IBM", body).unwrap_err();
        assert!(matches!(err, DataError::Information { .. }));
        assert!(err.to_string().contains("rate limit"));
        assert!(err.is_upstream());
    }

    #[test]
    fn test_error_message_wins_over_notice() {
        let err = validate_response(
            Function::CashFlow,
            "IBM",
            json!({"Information": "notice", "Error Message": "bad"}),
        )
        .unwrap_err();
        assert!(matches!(err, DataError::Api { .. }));
    }

    #[rstest]
    #[case(json!({}), true)]
    #[case(json!([]), false)]
    #[case(json!("text"), false)]
    fn test_empty_or_malformed(#[case] body: Value, #[case] empty: bool) {
        let err = validate_response(Function::BalanceSheet, "IBM", body).unwrap_err();
        if empty {
            assert!(matches!(err, DataError::EmptyResponse { .. }));
        } else {
            assert!(matches!(err, DataError::UnexpectedResponse { .. }));
        }
    }
}

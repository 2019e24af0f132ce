//! Test-case stdin reconstruction
//!
//! The frontend may deliver a test case's input as a single space-separated
//! line, losing the line breaks the question's boilerplate parser expects.
//! Reconstruction is data-driven when the question carries an input schema
//! descriptor; otherwise a shape heuristic (count, array elements, target)
//! is applied as a migration fallback.

use crate::models::InputField;

/// Heuristically rebuild multi-line stdin from a flattened input
///
/// Inputs that already contain a newline are only normalized (CRLF to LF,
/// trimmed). A single line splitting into at least three tokens is assumed
/// to be the "n, array, target" shape. Anything else passes through
/// unchanged; the result may still be wrong for the question's parser,
/// which is a known limitation of the heuristic, not an error.
pub fn normalize(raw: &str) -> String {
    if raw.contains('\n') {
        return raw.replace("\r\n", "\n").trim().to_string();
    }

    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() >= 3 {
        let count = tokens[0];
        let target = tokens[tokens.len() - 1];
        let elements = tokens[1..tokens.len() - 1].join(" ");
        return format!("{}\n{}\n{}", count, elements, target);
    }

    raw.to_string()
}

/// Rebuild stdin from a flattened input using the question's schema
///
/// Walks the schema in order, consuming tokens: a `Scalar` takes one token
/// onto its own line; an `Array` takes as many tokens as the value of the
/// referenced earlier scalar, space-joined on one line. Returns `None` when
/// the input is already line-structured, when a length field is missing or
/// non-numeric, or when the token count does not match the schema, so the
/// caller can fall back to the heuristic.
pub fn reconstruct(raw: &str, schema: &[InputField]) -> Option<String> {
    if raw.contains('\n') || schema.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let mut lines: Vec<String> = Vec::with_capacity(schema.len());
    // Parsed value of each already-consumed field; None for arrays
    let mut scalar_values: Vec<Option<usize>> = Vec::with_capacity(schema.len());
    let mut pos = 0usize;

    for field in schema {
        match field {
            InputField::Scalar => {
                let token = tokens.get(pos)?;
                lines.push((*token).to_string());
                scalar_values.push(token.parse::<usize>().ok());
                pos += 1;
            }
            InputField::Array { len_field } => {
                let len = (*scalar_values.get(*len_field)?)?;
                if pos + len > tokens.len() {
                    return None;
                }
                lines.push(tokens[pos..pos + len].join(" "));
                scalar_values.push(None);
                pos += len;
            }
        }
    }

    if pos != tokens.len() {
        return None;
    }

    Some(lines.join("\n"))
}

/// Normalize a raw test-case input for a question
///
/// Schema-driven reconstruction first, heuristic as fallback.
pub fn normalize_for_question(raw: &str, schema: Option<&[InputField]>) -> String {
    if let Some(schema) = schema {
        if let Some(rebuilt) = reconstruct(raw, schema) {
            return rebuilt;
        }
    }
    normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattened_round_trip() {
        // "4\n2 7 11 15\n9" joined with spaces comes back intact
        let original = "4\n2 7 11 15\n9";
        let flattened = original.replace('\n', " ");
        assert_eq!(normalize(&flattened), original);
    }

    #[test]
    fn test_multiline_passes_through_normalized() {
        assert_eq!(normalize("3\r\n1 2 3\r\n6"), "3\n1 2 3\n6");
        assert_eq!(normalize("  hello\nworld  "), "hello\nworld");
    }

    #[test]
    fn test_short_inputs_unchanged() {
        assert_eq!(normalize("hello"), "hello");
        assert_eq!(normalize("1 2"), "1 2");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_minimum_three_tokens() {
        assert_eq!(normalize("1 5 5"), "1\n5\n5");
    }

    #[test]
    fn test_schema_reconstruction() {
        let schema = vec![
            InputField::Scalar,
            InputField::Array { len_field: 0 },
            InputField::Scalar,
        ];
        assert_eq!(
            reconstruct("4 2 7 11 15 9", &schema),
            Some("4\n2 7 11 15\n9".to_string())
        );
    }

    #[test]
    fn test_schema_token_count_mismatch() {
        let schema = vec![InputField::Scalar, InputField::Array { len_field: 0 }];
        // Count says 3 elements but only 2 follow
        assert_eq!(reconstruct("3 1 2", &schema), None);
        // Leftover tokens
        assert_eq!(reconstruct("2 1 2 99", &schema), None);
    }

    #[test]
    fn test_schema_rejects_non_numeric_length() {
        let schema = vec![InputField::Scalar, InputField::Array { len_field: 0 }];
        assert_eq!(reconstruct("abc 1 2", &schema), None);
    }

    #[test]
    fn test_schema_skipped_for_multiline_input() {
        let schema = vec![InputField::Scalar];
        assert_eq!(reconstruct("1\n2", &schema), None);
    }

    #[test]
    fn test_normalize_for_question_falls_back() {
        let schema = vec![InputField::Scalar, InputField::Array { len_field: 0 }];
        // Schema does not match; heuristic takes over
        assert_eq!(
            normalize_for_question("4 2 7 11 15 9", Some(&schema)),
            "4\n2 7 11 15\n9"
        );
        // Schema matches; data-driven parse wins
        let schema = vec![
            InputField::Scalar,
            InputField::Array { len_field: 0 },
            InputField::Scalar,
        ];
        assert_eq!(
            normalize_for_question("2 10 20 5", Some(&schema)),
            "2\n10 20\n5"
        );
        assert_eq!(normalize_for_question("1 2", None), "1 2");
    }
}

//! JSON snapshots of whole programs
//!
//! A front end can hand its tree to another process (or a test to a file) by
//! serializing the [`Program`]. Chains are written as flat arrays of
//! `{ "head": ..., "pos": ... }` entries and rebuilt in order when read.

use std::io::Read;

use thiserror::Error;

use crate::ast::Program;

/// Interchange error
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// Malformed JSON or a tree shape that does not match the model
    #[error("invalid tree: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for interchange operations
pub type InterchangeResult<T> = Result<T, InterchangeError>;

/// Serialize a program as compact JSON
pub fn to_json(program: &Program) -> InterchangeResult<String> {
    Ok(serde_json::to_string(program)?)
}

/// Serialize a program as indented JSON
pub fn to_json_pretty(program: &Program) -> InterchangeResult<String> {
    Ok(serde_json::to_string_pretty(program)?)
}

/// Parse a program from JSON text
pub fn from_json(json: &str) -> InterchangeResult<Program> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a program from a reader holding JSON
pub fn from_reader<R: Read>(mut reader: R) -> InterchangeResult<Program> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn class_program_survives_a_round_trip() {
        let program = testutil::sample_class_program();
        let json = to_json(&program).unwrap();
        assert_eq!(from_json(&json).unwrap(), program);

        let pretty = to_json_pretty(&program).unwrap();
        assert_eq!(from_reader(pretty.as_bytes()).unwrap(), program);
    }

    #[test]
    fn chains_are_flat_arrays() {
        let json = to_json(&testutil::sample_lite_program()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let stmts = &value["Lite"]["stmts"];
        assert!(stmts.is_array());
        assert!(stmts[0]["head"].is_object());
        assert_eq!(stmts[0]["pos"]["line"], 4);
    }

    #[test]
    fn long_program_loads_and_drops() {
        let json = to_json(&testutil::generated_lite_program(200_000)).unwrap();
        let restored = from_json(&json).unwrap();
        let Program::Lite(lite) = &restored else {
            panic!("expected a lite program");
        };
        assert_eq!(lite.stmts.len(), 200_000);
        drop(restored);
    }

    #[test]
    fn malformed_input_is_an_error() {
        let err = from_json("{\"Lite\": 3}").unwrap_err();
        assert!(matches!(err, InterchangeError::Json(_)));
        assert!(err.to_string().starts_with("invalid tree"));
    }
}

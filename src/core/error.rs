//! Error types for board and pattern loading.
//!
//! Rejected pattern matches are not errors; see `connections::Verdict`.

/// Errors raised while building boards or pattern databases.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("board diagram is empty")]
    EmptyDiagram,

    #[error("board size {0} is outside 1..=19")]
    InvalidBoardSize(usize),

    #[error("board diagram row {row} has {found} points, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unexpected character {ch:?} on line {line}")]
    UnexpectedChar { ch: char, line: usize },

    #[error("pattern {0} has no anchor stone")]
    MissingAnchor(String),

    #[error("pattern {0} marks more than one move")]
    DuplicateMove(String),

    #[error("pattern {0} is a cut pattern without a cutting point")]
    MissingCutPoint(String),

    #[error("pattern {name}: unknown class flag {flag:?}")]
    UnknownClass { name: String, flag: char },

    #[error("pattern {0} is already registered")]
    DuplicatePattern(String),

    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
}

/// Result alias for fallible constructors.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AnalysisError::RaggedRow { row: 2, found: 4, expected: 5 }.to_string(),
            "board diagram row 2 has 4 points, expected 5"
        );
        assert_eq!(
            AnalysisError::UnknownClass { name: "CB1".into(), flag: 'q' }.to_string(),
            "pattern CB1: unknown class flag 'q'"
        );
    }
}

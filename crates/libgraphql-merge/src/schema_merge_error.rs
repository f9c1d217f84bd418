use thiserror::Error;

/// The engine operation that raised a [SchemaMergeError].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SchemaOperation {
    Merge,
    Pare,
}
impl std::fmt::Display for SchemaOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Merge => "merge",
            Self::Pare => "pare",
        })
    }
}

/// Which of the two inputs of a merge/pare call an error refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputSide {
    /// The left-hand document being merged into or pared from.
    Target,

    /// The right-hand document being merged in or subtracted.
    Source,
}
impl std::fmt::Display for InputSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Target => "target",
            Self::Source => "source",
        })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaMergeError {
    #[error(
        "`{operation}` was unable to produce schema text from its {side} \
        input (received {received})"
    )]
    InvalidInput {
        operation: SchemaOperation,
        side: InputSide,
        received: String,
    },

    #[error("Error parsing the {side} schema passed to `{operation}`: {err}")]
    UnparsableDocument {
        operation: SchemaOperation,
        side: InputSide,
        err: String,
    },
}

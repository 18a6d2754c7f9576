use thiserror::Error;

use crate::Relation;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{relation} input is missing required column {column:?}")]
    MissingColumn {
        relation: Relation,
        column:   &'static str,
    },

    #[error("{relation} input line {line}: invalid {column} value {value:?}")]
    InvalidCoordinate {
        relation: Relation,
        line:     u64,
        column:   &'static str,
        value:    String,
    },

    #[error("{relation} input parse error: {source}")]
    Csv {
        relation: Relation,
        #[source]
        source:   csv::Error,
    },

    #[error("cannot open {relation} input: {source}")]
    Io {
        relation: Relation,
        #[source]
        source:   std::io::Error,
    },
}

pub type InputResult<T> = Result<T, InputError>;

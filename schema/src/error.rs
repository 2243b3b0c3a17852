use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("File \"{0}\" appears more than once in the descriptor set")]
    DuplicateFile(String),
}

use swift_mapper_schema::SchemaError;
use thiserror::Error;

use crate::utils::quote;

#[derive(Debug, Error)]
pub enum MapperError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode CodeGeneratorRequest: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("Descriptor error: {0}")]
    Schema(#[from] SchemaError),

    #[error("File {} is not part of the descriptor set", quote(.0))]
    FileNotFound(String),

    #[error(
        "File {} depends on {}, which is not part of the descriptor set",
        quote(.file),
        quote(.dependency)
    )]
    DanglingDependency {
        file:       String,
        dependency: String,
    },

    #[error("Invalid plugin parameter: {0}")]
    InvalidParameter(String),
}

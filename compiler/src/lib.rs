//! swift-mapper-compiler
//!
//! This crate implements:
//!  1) The Swift identifier grammar (`classifier`),
//!  2) swift-protobuf's camel-casing of protobuf names (`camel_case`),
//!  3) Package → type prefix derivation (`prefix`),
//!  4) Reserved word disambiguation (`sanitizer`),
//!  5) Full Swift names of messages, enums and oneofs (`resolver`),
//!  6) The ordered name table (`emitter`) and the protoc plugin envelope
//!     around it (`compiler`), and
//!  7) Error types (`MapperError`).

pub mod error;
pub mod types;
pub mod utils;
pub mod classifier;
pub mod camel_case;
pub mod prefix;
pub mod sanitizer;
pub mod options;
pub mod resolver;
pub mod verifier;
pub mod emitter;
pub mod compiler;

pub use compiler::{build_response, compile_request, decode_request, encode_response, run_plugin};
pub use error::MapperError;
pub use types::{EntityKind, MappingTable, NameRecord};

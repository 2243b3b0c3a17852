use prost::Message;
use prost_types::compiler::{
    code_generator_response::{Feature, File},
    CodeGeneratorRequest, CodeGeneratorResponse,
};
use swift_mapper_schema::DescriptorSet;

use crate::{
    emitter::emit_file,
    error::MapperError,
    options::NamingOptions,
    resolver::NameResolver,
    types::MappingTable,
    verifier::verify_descriptor_set,
};

/// Name of the single file the plugin produces.
pub const MAPPER_FILE_NAME: &str = "mapper.txt";

/// Decode the `CodeGeneratorRequest` protoc writes to the plugin's stdin.
pub fn decode_request(buffer: &[u8]) -> Result<CodeGeneratorRequest, MapperError> {
    Ok(CodeGeneratorRequest::decode(buffer)?)
}

/// Compute the name table for every file of the request, in the order the
/// files were supplied. Fails without a partial table if the request is
/// inconsistent.
pub fn compile_request(request: &CodeGeneratorRequest) -> Result<MappingTable, MapperError> {
    let options = NamingOptions::from_parameter(request.parameter())?;
    let set = DescriptorSet::from_files(&request.proto_file)?;
    verify_descriptor_set(&set, &request.file_to_generate)?;

    let resolver = NameResolver::new(&set, &options);
    let mut table = MappingTable::default();
    for proto in &request.proto_file {
        let file = set
            .file_by_name(proto.name())
            .ok_or_else(|| MapperError::FileNotFound(proto.name().to_string()))?;
        emit_file(&set, &resolver, file, &mut table);
    }

    tracing::debug!(files = request.proto_file.len(), records = table.len(), "compiled request");
    Ok(table)
}

/// Wrap the table into a response carrying `mapper.txt`.
pub fn build_response(table: &MappingTable) -> CodeGeneratorResponse {
    CodeGeneratorResponse {
        supported_features: Some(Feature::Proto3Optional as u64),
        file: vec![File {
            name:    Some(MAPPER_FILE_NAME.to_string()),
            content: Some(table.to_string()),
            ..Default::default()
        }],
        ..Default::default()
    }
}

pub fn encode_response(response: &CodeGeneratorResponse) -> Vec<u8> {
    response.encode_to_vec()
}

/// Decode, compile and encode in one step. Returns the table alongside the
/// encoded response so the caller can echo it.
pub fn run_plugin(input: &[u8]) -> Result<(MappingTable, Vec<u8>), MapperError> {
    let request = decode_request(input)?;
    let table = compile_request(&request)?;
    let output = encode_response(&build_response(&table));
    Ok((table, output))
}

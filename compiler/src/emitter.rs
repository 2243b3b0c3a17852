use swift_mapper_schema::{DescriptorSet, FileId, MessageId, NestedDecl};

use crate::{
    resolver::NameResolver,
    types::{EntityKind, MappingTable, NameRecord},
};

/// Append the records of one file to `table`.
///
/// Top-level messages come first, each followed by its oneofs and then,
/// depth first, by the messages and enums declared inside it. The file's
/// top-level enums close the file.
pub fn emit_file(set: &DescriptorSet, resolver: &NameResolver<'_>, file: FileId, table: &mut MappingTable) {
    let schema_file = set.file(file);
    let before = table.len();

    for &message in &schema_file.messages {
        emit_message(set, resolver, message, table);
    }
    for &enum_id in &schema_file.enums {
        table.push(NameRecord {
            full_name:  set.enum_decl(enum_id).full_name.clone(),
            swift_name: resolver.enum_name(enum_id),
            kind:       EntityKind::Enum,
        });
    }

    tracing::debug!(file = %schema_file.name, records = table.len() - before, "mapped file");
}

fn emit_message(set: &DescriptorSet, resolver: &NameResolver<'_>, id: MessageId, table: &mut MappingTable) {
    let message = set.message(id);
    table.push(NameRecord {
        full_name:  message.full_name.clone(),
        swift_name: resolver.message_name(id),
        kind:       EntityKind::Message,
    });

    for &oneof in &message.oneofs {
        table.push(NameRecord {
            full_name:  set.oneof(oneof).full_name.clone(),
            swift_name: resolver.oneof_name(oneof),
            kind:       EntityKind::Oneof,
        });
    }

    for nested in &message.nested {
        match *nested {
            NestedDecl::Message(child) => emit_message(set, resolver, child, table),
            NestedDecl::Enum(child) => table.push(NameRecord {
                full_name:  set.enum_decl(child).full_name.clone(),
                swift_name: resolver.enum_name(child),
                kind:       EntityKind::Enum,
            }),
        }
    }
}

use std::collections::HashMap;

use prost_types::{DescriptorProto, EnumDescriptorProto, FileDescriptorProto};

use crate::{
    descriptor::{
        DescriptorSet, EnumDecl, EnumId, FileId, MessageDecl, MessageId, NestedDecl, OneofDecl,
        OneofId, Parent, SchemaFile,
    },
    error::SchemaError,
};

// Field numbers used in `SourceCodeInfo.Location.path`.
const FILE_MESSAGE_TYPE:   i32 = 4;
const MESSAGE_NESTED_TYPE: i32 = 3;
const MESSAGE_ENUM_TYPE:   i32 = 4;

/// Lowers one `FileDescriptorProto` into a `DescriptorSet`.
pub(crate) struct Builder<'a> {
    set:   &'a mut DescriptorSet,
    proto: &'a FileDescriptorProto,
    /// Start `(line, column)` of every element that has source info.
    spans: HashMap<Vec<i32>, (i32, i32)>,
}

impl<'a> Builder<'a> {
    pub(crate) fn new(set: &'a mut DescriptorSet, proto: &'a FileDescriptorProto) -> Self {
        let mut spans = HashMap::new();
        if let Some(info) = &proto.source_code_info {
            for location in &info.location {
                if location.span.len() >= 3 {
                    spans
                        .entry(location.path.clone())
                        .or_insert((location.span[0], location.span[1]));
                }
            }
        }
        Builder { set, proto, spans }
    }

    pub(crate) fn add_file(mut self) -> Result<FileId, SchemaError> {
        let name = self.proto.name().to_string();
        if self.set.by_name.contains_key(&name) {
            return Err(SchemaError::DuplicateFile(name));
        }

        let file_id = FileId(self.set.files.len());
        self.set.files.push(SchemaFile {
            name:         name.clone(),
            package:      self.proto.package().to_string(),
            swift_prefix: self
                .proto
                .options
                .as_ref()
                .and_then(|options| options.swift_prefix.clone()),
            dependencies: self.proto.dependency.clone(),
            messages:     Vec::new(),
            enums:        Vec::new(),
        });
        self.set.by_name.insert(name, file_id);

        let proto = self.proto;
        let package = proto.package();

        let mut messages = Vec::with_capacity(proto.message_type.len());
        for (i, message) in proto.message_type.iter().enumerate() {
            let full_name = join(package, message.name());
            let path = vec![FILE_MESSAGE_TYPE, i as i32];
            messages.push(self.add_message(message, Parent::File(file_id), full_name, path));
        }

        let mut enums = Vec::with_capacity(proto.enum_type.len());
        for enum_proto in &proto.enum_type {
            let full_name = join(package, enum_proto.name());
            enums.push(self.add_enum(enum_proto, Parent::File(file_id), full_name));
        }

        let file = &mut self.set.files[file_id.0];
        file.messages = messages;
        file.enums = enums;
        Ok(file_id)
    }

    fn add_message(
        &mut self,
        proto: &DescriptorProto,
        parent: Parent,
        full_name: String,
        path: Vec<i32>,
    ) -> MessageId {
        let id = MessageId(self.set.messages.len());
        self.set.messages.push(MessageDecl {
            name: proto.name().to_string(),
            full_name: full_name.clone(),
            parent,
            nested: Vec::new(),
            oneofs: Vec::new(),
        });

        let oneofs: Vec<OneofId> = proto
            .oneof_decl
            .iter()
            .map(|oneof| {
                let oneof_id = OneofId(self.set.oneofs.len());
                self.set.oneofs.push(OneofDecl {
                    name:      oneof.name().to_string(),
                    full_name: join(&full_name, oneof.name()),
                    parent:    id,
                });
                oneof_id
            })
            .collect();

        // (start position, declaration)
        let mut nested: Vec<(Option<(i32, i32)>, NestedDecl)> = Vec::new();
        for (i, child) in proto.nested_type.iter().enumerate() {
            let mut child_path = path.clone();
            child_path.extend([MESSAGE_NESTED_TYPE, i as i32]);
            let start = self.spans.get(&child_path).copied();
            let child_id = self.add_message(
                child,
                Parent::Message(id),
                join(&full_name, child.name()),
                child_path,
            );
            nested.push((start, NestedDecl::Message(child_id)));
        }
        for (i, child) in proto.enum_type.iter().enumerate() {
            let mut child_path = path.clone();
            child_path.extend([MESSAGE_ENUM_TYPE, i as i32]);
            let start = self.spans.get(&child_path).copied();
            let child_id = self.add_enum(child, Parent::Message(id), join(&full_name, child.name()));
            nested.push((start, NestedDecl::Enum(child_id)));
        }

        // Descriptors keep nested messages and enums in separate lists; only
        // source positions tell how they were interleaved.
        if nested.iter().all(|(start, _)| start.is_some()) {
            nested.sort_by_key(|(start, _)| *start);
        }

        let message = &mut self.set.messages[id.0];
        message.nested = nested.into_iter().map(|(_, decl)| decl).collect();
        message.oneofs = oneofs;
        id
    }

    fn add_enum(&mut self, proto: &EnumDescriptorProto, parent: Parent, full_name: String) -> EnumId {
        let id = EnumId(self.set.enums.len());
        self.set.enums.push(EnumDecl {
            name: proto.name().to_string(),
            full_name,
            parent,
        });
        id
    }
}

fn join(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", scope, name)
    }
}

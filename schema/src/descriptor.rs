use std::collections::HashMap;

use prost_types::FileDescriptorProto;

use crate::{builder::Builder, error::SchemaError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnumId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OneofId(pub(crate) usize);

/// Where a type is declared. This is a lookup, not ownership: the arena in
/// `DescriptorSet` owns every node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parent {
    File(FileId),
    Message(MessageId),
}

/// A type declared inside a message, in source declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NestedDecl {
    Message(MessageId),
    Enum(EnumId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaFile {
    pub name:         String,
    pub package:      String,
    /// The `swift_prefix` file option, when set.
    pub swift_prefix: Option<String>,
    pub dependencies: Vec<String>,
    pub messages:     Vec<MessageId>,
    pub enums:        Vec<EnumId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageDecl {
    pub name:      String,
    pub full_name: String,
    pub parent:    Parent,
    pub nested:    Vec<NestedDecl>,
    pub oneofs:    Vec<OneofId>,
}

impl MessageDecl {
    pub fn nested_messages(&self) -> impl Iterator<Item = MessageId> + '_ {
        self.nested.iter().filter_map(|decl| match decl {
            NestedDecl::Message(id) => Some(*id),
            NestedDecl::Enum(_) => None,
        })
    }

    pub fn nested_enums(&self) -> impl Iterator<Item = EnumId> + '_ {
        self.nested.iter().filter_map(|decl| match decl {
            NestedDecl::Enum(id) => Some(*id),
            NestedDecl::Message(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    pub name:      String,
    pub full_name: String,
    pub parent:    Parent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OneofDecl {
    pub name:      String,
    pub full_name: String,
    pub parent:    MessageId,
}

/// Arena holding every file and declaration of one request. Built once and
/// never mutated afterwards.
#[derive(Debug, Default)]
pub struct DescriptorSet {
    pub(crate) files:    Vec<SchemaFile>,
    pub(crate) messages: Vec<MessageDecl>,
    pub(crate) enums:    Vec<EnumDecl>,
    pub(crate) oneofs:   Vec<OneofDecl>,
    pub(crate) by_name:  HashMap<String, FileId>,
}

impl DescriptorSet {
    /// Lower raw file descriptors into the arena, keeping the order they were
    /// supplied in.
    pub fn from_files(files: &[FileDescriptorProto]) -> Result<DescriptorSet, SchemaError> {
        let mut set = DescriptorSet::default();
        for proto in files {
            Builder::new(&mut set, proto).add_file()?;
        }
        Ok(set)
    }

    pub fn files(&self) -> impl Iterator<Item = (FileId, &SchemaFile)> + '_ {
        self.files.iter().enumerate().map(|(i, file)| (FileId(i), file))
    }

    pub fn file_by_name(&self, name: &str) -> Option<FileId> {
        self.by_name.get(name).copied()
    }

    pub fn file(&self, id: FileId) -> &SchemaFile {
        &self.files[id.0]
    }

    pub fn message(&self, id: MessageId) -> &MessageDecl {
        &self.messages[id.0]
    }

    pub fn enum_decl(&self, id: EnumId) -> &EnumDecl {
        &self.enums[id.0]
    }

    pub fn oneof(&self, id: OneofId) -> &OneofDecl {
        &self.oneofs[id.0]
    }

    /// Walk up the parent chain until the declaring file is reached.
    pub fn file_of(&self, parent: Parent) -> FileId {
        let mut current = parent;
        loop {
            match current {
                Parent::File(file) => return file,
                Parent::Message(message) => current = self.message(message).parent,
            }
        }
    }
}

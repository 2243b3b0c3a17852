use swift_mapper_schema::{DescriptorSet, EnumId, MessageId, OneofId, Parent};

use crate::{
    camel_case::to_upper_camel_case,
    options::NamingOptions,
    prefix::type_prefix,
    sanitizer::sanitize,
    types::EntityKind,
};

/// Prepended to the camel-cased name of every oneof.
pub const ONEOF_PREFIX: &str = "OneOf_";

/// Computes the Swift name of a declaration from its own name and the chain
/// of messages above it. Nothing else in the tree is consulted.
pub struct NameResolver<'a> {
    set:     &'a DescriptorSet,
    options: &'a NamingOptions,
}

impl<'a> NameResolver<'a> {
    pub fn new(set: &'a DescriptorSet, options: &'a NamingOptions) -> Self {
        NameResolver { set, options }
    }

    pub fn message_name(&self, id: MessageId) -> String {
        let message = self.set.message(id);
        self.scoped(message.parent, self.sanitized_local(&message.name, EntityKind::Message))
    }

    pub fn enum_name(&self, id: EnumId) -> String {
        let enum_decl = self.set.enum_decl(id);
        self.scoped(enum_decl.parent, self.sanitized_local(&enum_decl.name, EntityKind::Enum))
    }

    pub fn oneof_name(&self, id: OneofId) -> String {
        let oneof = self.set.oneof(id);
        let camel = to_upper_camel_case(&oneof.name, &self.options.abbreviations);
        let local = sanitize(&format!("{}{}", ONEOF_PREFIX, camel), EntityKind::Oneof);
        self.scoped(Parent::Message(oneof.parent), local)
    }

    fn sanitized_local(&self, name: &str, kind: EntityKind) -> String {
        sanitize(&to_upper_camel_case(name, &self.options.abbreviations), kind)
    }

    /// Qualify `local` with its enclosing messages, walking up the parent
    /// chain, and finally with the file's type prefix.
    fn scoped(&self, parent: Parent, local: String) -> String {
        let mut segments = vec![local];
        let mut current = parent;
        let file = loop {
            match current {
                Parent::File(file) => break self.set.file(file),
                Parent::Message(id) => {
                    let message = self.set.message(id);
                    segments.push(self.sanitized_local(&message.name, EntityKind::Message));
                    current = message.parent;
                }
            }
        };

        segments.reverse();
        let prefix = type_prefix(&file.package, file.swift_prefix.as_deref());
        format!("{}{}", prefix, segments.join("."))
    }
}

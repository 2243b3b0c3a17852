//! An immutable, fully-resolved view of a set of `.proto` files, shaped for
//! name computation: every message, enum and oneof knows which file or
//! message contains it.
//!
//! ```
//! use prost_types::{DescriptorProto, FileDescriptorProto, OneofDescriptorProto};
//! use swift_mapper_schema::*;
//!
//! let file = FileDescriptorProto {
//!     name: Some("a/b.proto".to_owned()),
//!     package: Some("a.b".to_owned()),
//!     message_type: vec![DescriptorProto {
//!         name: Some("Foo".to_owned()),
//!         oneof_decl: vec![OneofDescriptorProto { name: Some("bar_baz".to_owned()), ..Default::default() }],
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let set = DescriptorSet::from_files(&[file]).unwrap();
//! let file_id = set.file_by_name("a/b.proto").unwrap();
//! let foo = set.file(file_id).messages[0];
//! assert_eq!(set.message(foo).full_name, "a.b.Foo");
//! assert_eq!(set.message(foo).parent, Parent::File(file_id));
//! assert_eq!(set.oneof(set.message(foo).oneofs[0]).full_name, "a.b.Foo.bar_baz");
//! ```

pub mod builder;
pub mod descriptor;
pub mod error;

pub use descriptor::*;
pub use error::SchemaError;

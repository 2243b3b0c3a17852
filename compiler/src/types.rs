use std::fmt;

use serde::Serialize;

/// The kind of declaration a generated name belongs to. Each kind carries the
/// suffix used to move a colliding name out of the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    Message,
    Enum,
    Oneof,
}

impl EntityKind {
    pub fn disambiguator(self) -> &'static str {
        match self {
            EntityKind::Message => "Message",
            EntityKind::Enum    => "Enum",
            EntityKind::Oneof   => "Oneof",
        }
    }
}

/// One line of `mapper.txt`: a protobuf full name and the Swift identifier
/// generated for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRecord {
    pub full_name:  String,
    pub swift_name: String,
    pub kind:       EntityKind,
}

impl fmt::Display for NameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.full_name, self.swift_name)
    }
}

/// Every record of a run, in emission order. Never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MappingTable {
    records: Vec<NameRecord>,
}

impl MappingTable {
    pub fn push(&mut self, record: NameRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[NameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Renders one `"<full name> <swift name>"` line per record, each terminated
/// by a newline.
impl fmt::Display for MappingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}

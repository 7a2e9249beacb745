use serde::{Deserialize, Serialize};

/// The kind of a decoded operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpKind {
    Push,
    Add,
    Write,
}

/// One entry of the opcode table: a canonical name mapped to a kind and the
/// number of integer operands the opcode consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeSpec {
    pub name: &'static str,
    pub kind: OpKind,
    pub arity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Two table entries share the same name.
    DuplicateName(String),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::DuplicateName(name) => {
                write!(f, "duplicate opcode name in table: '{}'", name)
            }
        }
    }
}

/// The fixed opcode table the decoder is parameterized over.
///
/// The table is data, not code: constructed once, validated for duplicate
/// names, and never mutated afterwards, so a single table can be shared
/// across any number of decode passes.
///
/// Lookup is an exact, case-sensitive match of a token's full text against
/// each entry's name, in table order. Names are distinct by construction, so
/// table order has no observable effect on which entry wins.
#[derive(Debug, Clone)]
pub struct OpcodeTable {
    specs: Vec<OpcodeSpec>,
}

impl OpcodeTable {
    /// Builds a table from the given entries, rejecting duplicate names.
    pub fn new(specs: Vec<OpcodeSpec>) -> Result<Self, TableError> {
        for (i, spec) in specs.iter().enumerate() {
            if specs[..i].iter().any(|other| other.name == spec.name) {
                return Err(TableError::DuplicateName(spec.name.to_string()));
            }
        }
        Ok(OpcodeTable { specs })
    }

    /// The current language subset: push/1, add/0, write/1.
    pub fn default_table() -> Self {
        // Distinct literals, so the validation cannot fail here.
        OpcodeTable {
            specs: vec![
                OpcodeSpec {
                    name: "push",
                    kind: OpKind::Push,
                    arity: 1,
                },
                OpcodeSpec {
                    name: "add",
                    kind: OpKind::Add,
                    arity: 0,
                },
                OpcodeSpec {
                    name: "write",
                    kind: OpKind::Write,
                    arity: 1,
                },
            ],
        }
    }

    /// Finds the entry whose name equals `text` in its entirety.
    pub fn lookup(&self, text: &str) -> Option<&OpcodeSpec> {
        self.specs.iter().find(|spec| spec.name == text)
    }

    /// Reverse lookup: the canonical name for a kind, used when rendering a
    /// decoded program back to source text.
    pub fn name_for(&self, kind: OpKind) -> Option<&'static str> {
        self.specs
            .iter()
            .find(|spec| spec.kind == kind)
            .map(|spec| spec.name)
    }
}

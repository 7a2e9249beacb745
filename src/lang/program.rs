use crate::lang::opcode::OpKind;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// A single decoded operation: a kind plus the integer operands its opcode
/// consumed.
///
/// The operand list length always equals the matched opcode's arity; every
/// opcode in the current table takes zero or one operand, but the model
/// carries a list so wider opcodes need no representation change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub kind: OpKind,
    pub operands: Vec<i64>,
}

impl Operation {
    pub fn new(kind: OpKind, operands: Vec<i64>) -> Self {
        Operation { kind, operands }
    }

    /// The sole operand of a single-operand opcode, if any.
    pub fn operand(&self) -> Option<i64> {
        self.operands.first().copied()
    }
}

/// A fully decoded program: the ordered operation sequence produced by one
/// decode pass. This is the front end's sole product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub ops: Vec<Operation>,
}

impl Program {
    pub fn new() -> Self {
        Program { ops: Vec::new() }
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes a program to `path` in the compact binary format.
pub fn save(program: &Program, path: &Path) -> io::Result<()> {
    let bytes = postcard::to_allocvec(program)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, bytes)
}

/// Reads a program previously written by [`save`].
pub fn load(path: &Path) -> io::Result<Program> {
    let bytes = std::fs::read(path)?;
    postcard::from_bytes(&bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Program {
        Program {
            ops: vec![
                Operation::new(OpKind::Push, vec![1]),
                Operation::new(OpKind::Add, vec![]),
                Operation::new(OpKind::Write, vec![0]),
            ],
        }
    }

    #[test]
    fn test_operand_accessor() {
        assert_eq!(Operation::new(OpKind::Push, vec![42]).operand(), Some(42));
        assert_eq!(Operation::new(OpKind::Add, vec![]).operand(), None);
    }

    #[test]
    fn test_binary_encoding_round_trip() {
        let program = sample();
        let bytes = postcard::to_allocvec(&program).unwrap();
        let back: Program = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(back, program);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("vasm-test-{}.vop", std::process::id()));

        let program = sample();
        save(&program, &path).unwrap();
        let back = load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(back, program);
    }
}

/// A decode error with the offending token's position.
///
/// `token` is the 1-based index into the scanned token stream and `offset`
/// the token's byte offset in the source. For `MissingOperand` the position
/// is the opcode token's, since the operand that should follow it does not
/// exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A token matched no opcode table entry.
    UnknownOpcode {
        text: String,
        token: usize,
        offset: usize,
    },
    /// An opcode requiring an operand was followed by end of input.
    MissingOperand {
        opcode: String,
        token: usize,
        offset: usize,
    },
    /// An operand token held a non-digit byte or overflowed the operand type.
    InvalidOperand {
        opcode: String,
        text: String,
        token: usize,
        offset: usize,
    },
}

impl std::fmt::Display for DecodeError {
    /// Formats as `token N (byte M): message` for CLI-friendly diagnostics.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::UnknownOpcode {
                text,
                token,
                offset,
            } => write!(
                f,
                "token {} (byte {}): unknown opcode '{}'",
                token, offset, text
            ),
            DecodeError::MissingOperand {
                opcode,
                token,
                offset,
            } => write!(
                f,
                "token {} (byte {}): opcode '{}' requires an integer operand, found end of input",
                token, offset, opcode
            ),
            DecodeError::InvalidOperand {
                opcode,
                text,
                token,
                offset,
            } => write!(
                f,
                "token {} (byte {}): opcode '{}' requires a non-negative integer operand, found '{}'",
                token, offset, opcode, text
            ),
        }
    }
}

use crate::frontend::decode_error::DecodeError;
use crate::frontend::token::Token;
use crate::lang::opcode::{OpcodeSpec, OpcodeTable};
use crate::lang::program::{Operation, Program};

/// Decodes a scanned token stream into a [`Program`].
///
/// The decoder walks the token list until the end-of-input token. Each
/// non-EOF token must match an opcode table entry exactly (full text,
/// case-sensitive); the entry's arity says how many following tokens are
/// consumed as integer operands.
///
/// Notes:
/// - A token matching no table entry is an error, not a skip. The language
///   has no comment syntax, so an unrecognized token can only be a mistake.
/// - Operands are base-10, non-negative, every byte an ASCII digit. There is
///   no sign handling, so a negative value cannot be produced.
/// - Decoding holds no state across calls: the same tokens and table always
///   yield the same program.
pub struct Decoder<'s, 't> {
    source: &'s str,
    tokens: &'t [Token],
    pos: usize,
    table: &'t OpcodeTable,
}

impl<'s, 't> Decoder<'s, 't> {
    /// Creates a decoder over scanner output.
    ///
    /// `source` must be the same buffer the tokens were scanned from; token
    /// spans are resolved against it.
    pub fn new(source: &'s str, tokens: &'t [Token], table: &'t OpcodeTable) -> Self {
        Decoder {
            source,
            tokens,
            pos: 0,
            table,
        }
    }

    /// Returns the current token without consuming it.
    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Advances the token stream by one and returns the consumed token.
    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        self.pos += 1;
        token
    }

    /// The 1-based stream index of the token at `pos`.
    fn index_of(&self, pos: usize) -> usize {
        pos + 1
    }

    /// Decodes the whole token stream.
    ///
    /// Operations appear in the same relative order as their opcode tokens
    /// in the source. Stops cleanly at the end-of-input token; a scanner
    /// always emits one, so running off the end of the list means the token
    /// stream did not come from [`Scanner::scan`](crate::frontend::scanner::Scanner::scan).
    pub fn decode(&mut self) -> Result<Program, DecodeError> {
        let mut program = Program::new();

        while let Some(token) = self.current() {
            if token.eof {
                break;
            }

            let text = token.text(self.source);
            let spec = match self.table.lookup(text) {
                Some(spec) => *spec,
                None => {
                    return Err(DecodeError::UnknownOpcode {
                        text: text.to_string(),
                        token: self.index_of(self.pos),
                        offset: token.span.start,
                    });
                }
            };

            let opcode_pos = self.pos;
            self.advance();

            let mut operands = Vec::with_capacity(spec.arity);
            for _ in 0..spec.arity {
                operands.push(self.decode_operand(&spec, opcode_pos)?);
            }

            program.ops.push(Operation::new(spec.kind, operands));
        }

        Ok(program)
    }

    /// Consumes one operand token for `spec`.
    ///
    /// # Errors
    /// - `MissingOperand` if the stream is at end of input; the reported
    ///   position is the opcode token at `opcode_pos`.
    /// - `InvalidOperand` if the token holds anything but ASCII digits, or
    ///   the digits overflow `i64`.
    fn decode_operand(
        &mut self,
        spec: &OpcodeSpec,
        opcode_pos: usize,
    ) -> Result<i64, DecodeError> {
        let token = match self.advance() {
            Some(token) if !token.eof => *token,
            _ => {
                let opcode_token = &self.tokens[opcode_pos];
                return Err(DecodeError::MissingOperand {
                    opcode: spec.name.to_string(),
                    token: self.index_of(opcode_pos),
                    offset: opcode_token.span.start,
                });
            }
        };

        let text = token.text(self.source);
        let invalid = || DecodeError::InvalidOperand {
            opcode: spec.name.to_string(),
            text: text.to_string(),
            token: self.index_of(self.pos - 1),
            offset: token.span.start,
        };

        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        // All digits, no sign: parse can only fail on i64 overflow.
        text.parse::<i64>().map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::scanner::Scanner;
    use crate::lang::opcode::OpKind;

    fn decode(source: &str) -> Result<Program, DecodeError> {
        let tokens = Scanner::new(source).scan();
        let table = OpcodeTable::default_table();
        Decoder::new(source, &tokens, &table).decode()
    }

    fn kinds(program: &Program) -> Vec<(OpKind, Option<i64>)> {
        program
            .ops
            .iter()
            .map(|op| (op.kind, op.operand()))
            .collect()
    }

    #[test]
    fn test_simple_program() {
        let program = decode("push 1 add write 0").unwrap();
        assert_eq!(
            kinds(&program),
            vec![
                (OpKind::Push, Some(1)),
                (OpKind::Add, None),
                (OpKind::Write, Some(0)),
            ]
        );
    }

    #[test]
    fn test_empty_source_decodes_to_empty_program() {
        let program = decode("").unwrap();
        assert!(program.ops.is_empty());
    }

    #[test]
    fn test_operations_in_source_order() {
        let program = decode("write 2 push 9 add add").unwrap();
        assert_eq!(
            kinds(&program),
            vec![
                (OpKind::Write, Some(2)),
                (OpKind::Push, Some(9)),
                (OpKind::Add, None),
                (OpKind::Add, None),
            ]
        );
    }

    #[test]
    fn test_missing_operand_at_end_of_input() {
        let err = decode("push").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingOperand {
                opcode: "push".to_string(),
                token: 1,
                offset: 0,
            }
        );
    }

    #[test]
    fn test_missing_operand_after_valid_prefix() {
        let err = decode("push 1 add write").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingOperand {
                opcode: "write".to_string(),
                token: 4,
                offset: 11,
            }
        );
    }

    #[test]
    fn test_invalid_operand_non_digit() {
        let err = decode("push abc").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidOperand {
                opcode: "push".to_string(),
                text: "abc".to_string(),
                token: 2,
                offset: 5,
            }
        );
    }

    #[test]
    fn test_invalid_operand_negative() {
        // No sign handling: '-' is a non-digit byte.
        let err = decode("push -1").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidOperand { .. }));
    }

    #[test]
    fn test_invalid_operand_overflow() {
        // One past i64::MAX.
        let err = decode("push 9223372036854775808").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidOperand { .. }));
    }

    #[test]
    fn test_max_operand_accepted() {
        let program = decode("push 9223372036854775807").unwrap();
        assert_eq!(program.ops[0].operand(), Some(i64::MAX));
    }

    #[test]
    fn test_unknown_opcode() {
        let err = decode("push 1 nop add").unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownOpcode {
                text: "nop".to_string(),
                token: 3,
                offset: 7,
            }
        );
    }

    #[test]
    fn test_opcode_name_must_match_in_full() {
        // A prefix of an opcode name is not that opcode.
        let err = decode("pus 1").unwrap_err();
        assert!(matches!(err, DecodeError::UnknownOpcode { .. }));

        let err = decode("pushh 1").unwrap_err();
        assert!(matches!(err, DecodeError::UnknownOpcode { .. }));
    }

    #[test]
    fn test_decode_is_idempotent() {
        let source = "push 3 push 4 add write 0";
        let tokens = Scanner::new(source).scan();
        let table = OpcodeTable::default_table();

        let first = Decoder::new(source, &tokens, &table).decode().unwrap();
        let second = Decoder::new(source, &tokens, &table).decode().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_error_message_positions() {
        let err = decode("push abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "token 2 (byte 5): opcode 'push' requires a non-negative integer operand, found 'abc'"
        );

        let err = decode("add push").unwrap_err();
        assert_eq!(
            err.to_string(),
            "token 2 (byte 4): opcode 'push' requires an integer operand, found end of input"
        );
    }
}

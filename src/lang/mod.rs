//! # vasm operation model
//!
//! The shared data the front end is built around: the opcode table the
//! decoder is parameterized over, the decoded operation/program types, and
//! the listing/rendering helpers for decoded programs.

pub mod dump;
pub mod opcode;
pub mod program;

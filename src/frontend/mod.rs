pub mod decode_error;
pub mod decoder;
pub mod scanner;
pub mod token;
pub mod token_dumper;

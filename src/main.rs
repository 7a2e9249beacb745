mod frontend;
mod lang;

use std::{env, fs, path::Path, path::PathBuf};

use crate::frontend::decoder::Decoder;
use crate::frontend::scanner::Scanner;
use crate::frontend::token_dumper::TokenDumper;
use crate::lang::dump::print_ops;
use crate::lang::opcode::OpcodeTable;
use crate::lang::program;

fn main() {
    let args: Vec<String> = env::args().collect();

    let tokens_only = args.contains(&"--tokens".to_string());
    let no_color = args.contains(&"--no-color".to_string());
    let emit = args.contains(&"--emit".to_string());
    let show = args.contains(&"--show".to_string());
    let help = args.contains(&"--help".to_string()) || args.contains(&"-h".to_string());

    // first non-flag argument is the filename
    let filename = args.iter().skip(1).find(|a| !a.starts_with('-'));

    if help {
        print_usage();
        return;
    }

    match filename {
        Some(filename) => {
            if show {
                ensure_extension(filename, "vop");
                show_binary(filename);
                return;
            }

            ensure_extension(filename, "vasm");
            match fs::read_to_string(filename) {
                Ok(source) => {
                    if tokens_only {
                        dump_tokens(&source, no_color);
                    } else {
                        run_frontend(&source, filename, emit);
                    }
                }
                Err(e) => {
                    eprintln!("Failed to read '{}': {}", filename, e);
                    std::process::exit(1);
                }
            }
        }
        None => print_usage(),
    }
}

fn ensure_extension(filename: &str, expected: &str) {
    let path = Path::new(filename);
    if path.extension().and_then(|e| e.to_str()) != Some(expected) {
        eprintln!("Error: expected a .{} file, got {}", expected, filename);
        std::process::exit(1);
    }
}

fn dump_tokens(source: &str, no_color: bool) {
    let tokens = Scanner::new(source).scan();

    let mut dumper = TokenDumper::new();
    if no_color {
        dumper = dumper.no_color();
    }
    dumper.dump(&tokens, source);
}

fn print_usage() {
    println!("VASM - Stack Machine Assembly Front End");
    println!();
    println!("Usage:");
    println!("  vasm <file.vasm>           Decode a program and print its operations");
    println!("  vasm --tokens <file.vasm>  Show tokens only");
    println!("      --no-color             Disable colors in the token listing");
    println!("  vasm --emit <file.vasm>    Decode and also write <file>.vop (binary)");
    println!("  vasm --show <file.vop>     Print the operations of a .vop binary");
    println!("  vasm --help, -h            Show this help");
}

fn run_frontend(source: &str, filename: &str, emit: bool) {
    let table = OpcodeTable::default_table();
    let tokens = Scanner::new(source).scan();

    let program = match Decoder::new(source, &tokens, &table).decode() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Decode error: {}", e);
            std::process::exit(1);
        }
    };

    print_ops(&program, &table);

    if emit {
        let out = PathBuf::from(filename).with_extension("vop");
        match program::save(&program, &out) {
            Ok(()) => println!("Wrote {}", out.display()),
            Err(e) => {
                eprintln!("Failed to write '{}': {}", out.display(), e);
                std::process::exit(1);
            }
        }
    }
}

fn show_binary(filename: &str) {
    let table = OpcodeTable::default_table();
    match program::load(Path::new(filename)) {
        Ok(program) => print_ops(&program, &table),
        Err(e) => {
            eprintln!("Failed to read '{}': {}", filename, e);
            std::process::exit(1);
        }
    }
}

use crate::lang::opcode::OpcodeTable;
use crate::lang::program::Program;

/// Print a decoded program as an operation listing
pub fn print_ops(program: &Program, table: &OpcodeTable) {
    println!("=== OPERATIONS ===");
    println!("{} operations", program.ops.len());

    for (i, op) in program.ops.iter().enumerate() {
        let name = table
            .name_for(op.kind)
            .unwrap_or("<unknown>")
            .to_uppercase();
        print!("{:04} {:<8}", i, name);
        for operand in &op.operands {
            print!(" {}", operand);
        }
        println!();
    }
}

/// Render a program back to canonical source text: opcode names and operands,
/// space-joined. Scanning and decoding the result reproduces the program.
pub fn render_source(program: &Program, table: &OpcodeTable) -> String {
    let mut parts: Vec<String> = Vec::new();
    for op in &program.ops {
        if let Some(name) = table.name_for(op.kind) {
            parts.push(name.to_string());
        }
        for operand in &op.operands {
            parts.push(operand.to_string());
        }
    }
    parts.join(" ")
}

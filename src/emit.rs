//! Writing compiled tables out as Rust source.
//!
//! The output is self-contained: one constant per class, `PROPERTY_COUNT`,
//! the three sentinels, the property blocks, the block table and the rule
//! table. Identical tables always produce identical bytes.

use std::io::Write;

use crate::class_table::{Block, BLOCK_COUNT, BLOCK_SIZE};
use crate::error::Result;
use crate::rule_table::{BREAK_RULE, KEEP_RULE, PREVIOUS_BREAK_RULE};
use crate::CompiledTables;

const HEADER: &str = "// This file is generated by the `generate` tool. DO NOT EDIT MANUALLY!\n\n";

// Entries per line in the property blocks.
const ROW: usize = 16;

pub fn write_tables<W: Write>(f: &mut W, tables: &CompiledTables) -> Result<()> {
    f.write_all(HEADER.as_bytes())?;
    write_defines(f, tables)?;
    write_properties(f, tables)?;
    write_rules(f, tables)?;
    Ok(())
}

fn write_defines<W: Write>(f: &mut W, tables: &CompiledTables) -> Result<()> {
    for (i, class) in tables.alphabet().classes().iter().enumerate() {
        writeln!(f, "pub const {}: u8 = {};", class.name(), i + 1)?;
    }
    writeln!(
        f,
        "pub const PROPERTY_COUNT: usize = {};\n",
        tables.alphabet().len()
    )?;
    writeln!(f, "pub const BREAK_RULE: i8 = {};", BREAK_RULE)?;
    writeln!(f, "pub const PREVIOUS_BREAK_RULE: i8 = {};", PREVIOUS_BREAK_RULE)?;
    writeln!(f, "pub const KEEP_RULE: i8 = {};\n", KEEP_RULE)?;
    Ok(())
}

fn write_properties<W: Write>(f: &mut W, tables: &CompiledTables) -> Result<()> {
    let blocks = tables.classes().blocks();

    for (n, block) in blocks.iter().enumerate() {
        if let Block::Dense(classes) = block {
            writeln!(f, "pub const UAX14_PROPERTIES_{}: [u8; {}] = [", n, BLOCK_SIZE)?;
            for row in classes.chunks(ROW) {
                write!(f, "   ")?;
                for class in row {
                    write!(f, " {},", class.name())?;
                }
                writeln!(f)?;
            }
            writeln!(f, "];\n")?;
        }
    }

    for class in tables.classes().uniform_classes() {
        writeln!(
            f,
            "pub const UAX14_PROPERTIES_{0}: [u8; {1}] = [{0}; {1}];",
            class.name(),
            BLOCK_SIZE
        )?;
    }
    writeln!(f)?;

    writeln!(
        f,
        "pub const UAX14_PROPERTY_TABLE: [&[u8; {}]; {}] = [",
        BLOCK_SIZE, BLOCK_COUNT
    )?;
    for (n, block) in blocks.iter().enumerate() {
        match block {
            Block::Uniform(class) => writeln!(f, "    &UAX14_PROPERTIES_{},", class.name())?,
            Block::Dense(_) => writeln!(f, "    &UAX14_PROPERTIES_{},", n)?,
        }
    }
    writeln!(f, "];\n")?;
    Ok(())
}

fn write_rules<W: Write>(f: &mut W, tables: &CompiledTables) -> Result<()> {
    let alphabet = tables.alphabet();
    writeln!(
        f,
        "pub const UAX14_RULE_TABLE: [i8; PROPERTY_COUNT * PROPERTY_COUNT] = ["
    )?;
    let rows = tables.rules().as_slice().chunks(alphabet.len());
    for (left, row) in alphabet.classes().iter().zip(rows) {
        writeln!(f, "    // {}", left.name())?;
        write!(f, "   ")?;
        for &value in row {
            match alphabet.class_at(value as u8) {
                Some(target) if value > 0 => write!(f, " {} as i8,", target.name())?,
                _ => write!(f, " {},", value)?,
            }
        }
        writeln!(f)?;
    }
    writeln!(f, "];")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile;

    fn emit(line_break: &str) -> String {
        let tables = compile(line_break, "0020..007E;Na\nFF01..FF60;F\n").unwrap();
        let mut out = Vec::new();
        write_tables(&mut out, &tables).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn declares_everything_the_consumer_needs() {
        let source = emit("0028;OP\n0041..005A;AL\n");
        assert!(source.starts_with("// This file is generated"));
        assert!(source.contains("pub const BK: u8 = 1;\n"));
        assert!(source.contains("pub const OP_OP30: u8 = "));
        assert!(source.contains("pub const EOT: u8 = "));
        assert!(source.contains("pub const PROPERTY_COUNT: usize = 58;\n"));
        assert!(source.contains("pub const BREAK_RULE: i8 = -128;\n"));
        assert!(source.contains("pub const PREVIOUS_BREAK_RULE: i8 = -2;\n"));
        assert!(source.contains("pub const KEEP_RULE: i8 = -1;\n"));
        for name in ["ID", "SG", "XX"].iter() {
            assert!(source.contains(&format!(
                "pub const UAX14_PROPERTIES_{0}: [u8; 1024] = [{0}; 1024];",
                name
            )));
        }
        assert!(source.contains("pub const UAX14_PROPERTIES_0: [u8; 1024] = [\n"));
        assert!(!source.contains("pub const UAX14_PROPERTIES_1: "));
        assert!(source.contains("pub const UAX14_PROPERTY_TABLE: [&[u8; 1024]; 128] = [\n"));
        assert!(source.contains("    // RI_RI\n"));
        assert!(source.contains(" RI_RI as i8,"));
    }

    #[test]
    fn block_table_has_one_line_per_block() {
        let source = emit("0041..005A;AL\n");
        let start = source.find("UAX14_PROPERTY_TABLE").unwrap();
        let end = start + source[start..].find("];").unwrap();
        let lines = source[start..end]
            .lines()
            .filter(|line| line.starts_with("    &"))
            .count();
        assert_eq!(lines, BLOCK_COUNT);
    }
}

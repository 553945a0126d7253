extern crate uax_14_tables;

use uax_14_tables::emit::write_tables;
use uax_14_tables::{
    compile, Block, Class, CompiledTables, Error, Outcome, BLOCK_COUNT, BLOCK_SIZE,
    CODEPOINT_LIMIT,
};

const LINE_BREAK: &str = include_str!("data/LineBreak.txt");
const EAST_ASIAN_WIDTH: &str = include_str!("data/EastAsianWidth.txt");

fn tables() -> CompiledTables {
    compile(LINE_BREAK, EAST_ASIAN_WIDTH).unwrap()
}

fn emitted(tables: &CompiledTables) -> Vec<u8> {
    let mut out = Vec::new();
    write_tables(&mut out, tables).unwrap();
    out
}

#[test]
fn every_codepoint_has_a_class() {
    let tables = tables();
    assert_eq!(tables.classes().blocks().len(), BLOCK_COUNT);
    for codepoint in 0..CODEPOINT_LIMIT {
        let class = tables.classes().lookup(codepoint);
        assert!(class.is_some(), "{:X}", codepoint);
        assert!(
            tables.alphabet().index_of(class.unwrap()).is_some(),
            "{:X}",
            codepoint
        );
    }
    assert!(tables.classes().lookup(CODEPOINT_LIMIT - 1).is_some());
    assert_eq!(tables.classes().lookup(CODEPOINT_LIMIT), None);
    assert_eq!(tables.classes().lookup(0x10FFFF), None);
}

#[test]
fn classes_come_from_the_data() {
    let classes = tables().classes().clone();
    assert_eq!(classes.lookup(0x41), Some(Class::AL));
    assert_eq!(classes.lookup(0x28), Some(Class::OpenPunct));
    assert_eq!(classes.lookup(0x3008), Some(Class::OpenPunctEastAsian));
    assert_eq!(classes.lookup(0xFF09), Some(Class::CL));
    assert_eq!(classes.lookup(0x29), Some(Class::CP));
    assert_eq!(classes.lookup(0x1F1E6), Some(Class::RI));
    // Unlisted codepoints fall back to their defaults.
    assert_eq!(classes.lookup(0x3400), Some(Class::ID));
    assert_eq!(classes.lookup(0xFA00), Some(Class::ID));
    assert_eq!(classes.lookup(0x1F000), Some(Class::ID));
    assert_eq!(classes.lookup(0x20A0), Some(Class::PR));
    assert_eq!(classes.lookup(0x0E00), Some(Class::XX));
}

#[test]
fn uniform_blocks() {
    let tables = tables();
    let blocks = tables.classes().blocks();
    assert_eq!(blocks[0x5000 / BLOCK_SIZE], Block::Uniform(Class::ID));
    assert_eq!(blocks[0xD800 / BLOCK_SIZE], Block::Uniform(Class::SG));
    assert_eq!(blocks[0x10000 / BLOCK_SIZE], Block::Uniform(Class::XX));
    match &blocks[0] {
        Block::Dense(classes) => {
            assert_eq!(classes[0x20], Class::SP);
            assert_eq!(classes[0x300], Class::CM);
        }
        Block::Uniform(class) => panic!("block 0 is uniform {}", class),
    }

    let uniform = tables.classes().uniform_classes();
    for class in [Class::ID, Class::SG, Class::XX].iter() {
        assert!(uniform.contains(class), "{}", class);
    }
    assert!(tables.classes().dense_block_count() < BLOCK_COUNT);
}

#[test]
fn no_empty_rule_entries() {
    let tables = tables();
    let count = tables.alphabet().len();
    assert_eq!(tables.rules().as_slice().len(), count * count);
    for (n, &value) in tables.rules().as_slice().iter().enumerate() {
        assert_ne!(value, 0, "entry {}", n);
        if value > 0 {
            assert!(value as usize <= count, "entry {}", n);
        }
    }
}

#[test]
fn table_lookup_matches_the_rules() {
    let tables = tables();
    let alphabet = tables.alphabet();
    for &left in alphabet.classes() {
        for &right in alphabet.classes() {
            let resolution = uax_14_tables::resolve(left, right).unwrap();
            assert_eq!(
                tables.rules().outcome(left, right),
                Some(resolution.outcome),
                "{} x {}",
                left,
                right
            );
        }
    }
    let op = alphabet.index_of(Class::OpenPunct).unwrap();
    let al = alphabet.index_of(Class::AL).unwrap();
    assert_eq!(tables.rules().get(op, al), uax_14_tables::KEEP_RULE);
    assert_eq!(
        tables.rules().outcome(Class::PR, Class::OpenPunct),
        Some(Outcome::Transition(Class::OpenPunctAfterPrefix))
    );
}

#[test]
fn output_is_deterministic() {
    let first = emitted(&tables());
    let second = emitted(&tables());
    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert_eq!(tables(), tables());
}

#[test]
fn bad_input_produces_nothing() {
    match compile("0041..005A;AL\n0050;NU\n", EAST_ASIAN_WIDTH) {
        Err(Error::Overlap { codepoint, .. }) => assert_eq!(codepoint, 0x50),
        other => panic!("expected an overlap, got {:?}", other.map(|_| ())),
    }
    match compile("0041;QQ\n", EAST_ASIAN_WIDTH) {
        Err(Error::UnknownValue { value, .. }) => assert_eq!(value, "QQ"),
        other => panic!("expected an unknown value, got {:?}", other.map(|_| ())),
    }
    match compile("0041..0040;AL\n", EAST_ASIAN_WIDTH) {
        Err(Error::Malformed { line, .. }) => assert_eq!(line, 1),
        other => panic!("expected a malformed line, got {:?}", other.map(|_| ())),
    }
}

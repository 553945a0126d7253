//! The codepoint → class lookup structure.

use log::debug;

use crate::class::Class;
use crate::error::{Error, Result};
use crate::resolver::CodepointRange;

/// Codepoints at or above this are not described by the compiled tables.
pub const CODEPOINT_LIMIT: u32 = 0x20000;

/// Codepoints per block.
pub const BLOCK_SIZE: usize = 1024;

/// Number of blocks needed to cover everything below [`CODEPOINT_LIMIT`].
pub const BLOCK_COUNT: usize = CODEPOINT_LIMIT as usize / BLOCK_SIZE;

/// Classes that always get a named uniform block in the output, whether or
/// not the data uses them: unassigned ideographic space, surrogates and
/// unknown.
pub const DEFAULT_BLOCKS: [Class; 3] = [Class::ID, Class::SG, Class::XX];

/// One block of [`BLOCK_SIZE`] contiguous codepoints.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Block {
    /// Every codepoint in the block has this class.
    Uniform(Class),
    /// The class of each codepoint in the block.
    Dense(Box<[Class; BLOCK_SIZE]>),
}

impl Block {
    #[inline]
    pub fn get(&self, offset: usize) -> Class {
        match self {
            Block::Uniform(class) => *class,
            Block::Dense(classes) => classes[offset],
        }
    }
}

/// Two level table: `codepoint / BLOCK_SIZE` picks a block, the low bits
/// index into it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ClassTable {
    blocks: Vec<Block>,
}

impl ClassTable {
    /// Builds the table from ranges that must cover `[0, CODEPOINT_LIMIT)`
    /// exactly once, in order.
    pub fn from_ranges(ranges: &[CodepointRange]) -> Result<ClassTable> {
        let mut next = 0u32;
        for range in ranges {
            if range.start != next || range.end < range.start {
                return Err(Error::Coverage {
                    codepoint: next.min(range.start),
                });
            }
            if range.end >= CODEPOINT_LIMIT {
                return Err(Error::Coverage {
                    codepoint: CODEPOINT_LIMIT,
                });
            }
            next = range.end + 1;
        }
        if next != CODEPOINT_LIMIT {
            return Err(Error::Coverage { codepoint: next });
        }

        let mut blocks = Vec::with_capacity(BLOCK_COUNT);
        let mut ranges = ranges.iter().peekable();
        for block in 0..BLOCK_COUNT {
            let base = (block * BLOCK_SIZE) as u32;
            let mut classes = Box::new([Class::XX; BLOCK_SIZE]);
            for (offset, slot) in classes.iter_mut().enumerate() {
                let codepoint = base + offset as u32;
                while let Some(range) = ranges.peek() {
                    if range.end < codepoint {
                        ranges.next();
                    } else {
                        break;
                    }
                }
                // Coverage was checked above, so a range is always current.
                if let Some(range) = ranges.peek() {
                    *slot = range.class;
                }
            }

            let first = classes[0];
            if classes.iter().all(|&class| class == first) {
                blocks.push(Block::Uniform(first));
            } else {
                blocks.push(Block::Dense(classes));
            }
        }

        let table = ClassTable { blocks };
        debug!(
            "{} of {} blocks materialized",
            table.dense_block_count(),
            BLOCK_COUNT
        );
        Ok(table)
    }

    /// The class of `codepoint`.
    ///
    /// Codepoints at or past [`CODEPOINT_LIMIT`] are outside this table's
    /// contract and yield `None`; consumers apply their own default there.
    #[inline]
    pub fn lookup(&self, codepoint: u32) -> Option<Class> {
        if codepoint >= CODEPOINT_LIMIT {
            return None;
        }
        let codepoint = codepoint as usize;
        Some(self.blocks[codepoint / BLOCK_SIZE].get(codepoint & (BLOCK_SIZE - 1)))
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn dense_block_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|block| match block {
                Block::Dense(_) => true,
                Block::Uniform(_) => false,
            })
            .count()
    }

    /// Classes that have a uniform block somewhere, plus the defaults, in
    /// class order.
    pub fn uniform_classes(&self) -> Vec<Class> {
        let mut classes: Vec<Class> = DEFAULT_BLOCKS.to_vec();
        for block in &self.blocks {
            if let Block::Uniform(class) = block {
                classes.push(*class);
            }
        }
        classes.sort();
        classes.dedup();
        classes
    }
}

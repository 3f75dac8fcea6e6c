use anyhow::{bail, ensure, Result};

/// First word of every SPIR-V module.
pub const SPIRV_MAGIC: u32 = 0x0723_0203;

/// Magic, version, generator, bound, schema.
const HEADER_WORDS: usize = 5;

/// Converts a SPIR-V binary into native-endian words.
///
/// The module may have been written in either byte order; the magic number
/// decides which, and words are swapped when needed.
pub fn words_from_bytes(bytes: &[u8]) -> Result<Vec<u32>> {
    ensure!(!bytes.is_empty(), "SPIR-V binary is empty");
    ensure!(
        bytes.len() % 4 == 0,
        "SPIR-V binary length {} is not a multiple of 4",
        bytes.len()
    );

    let mut words: Vec<u32> = bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    ensure!(
        words.len() >= HEADER_WORDS,
        "SPIR-V binary has {} words, shorter than the {HEADER_WORDS}-word header",
        words.len()
    );

    match words[0] {
        SPIRV_MAGIC => {}
        m if m.swap_bytes() == SPIRV_MAGIC => {
            for w in &mut words {
                *w = w.swap_bytes();
            }
        }
        other => bail!("not a SPIR-V binary (magic {other:#010x})"),
    }

    Ok(words)
}

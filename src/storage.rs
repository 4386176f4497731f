//! Whole-value persistence of big integers with `bincode`.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use bincode::config;
use log::debug;

use crate::bigint::BigInt;
use crate::error::{Error, Result};

/// Encodes a number into bytes (limbs, least significant first).
pub fn encode(value: &BigInt) -> Result<Vec<u8>> {
    Ok(bincode::serde::encode_to_vec(value, config::standard())?)
}

/// Decodes a number produced by [`encode`]. Limbs are validated and the
/// encoding must use up the whole slice.
pub fn decode(bytes: &[u8]) -> Result<BigInt> {
    let (value, read): (BigInt, usize) =
        bincode::serde::decode_from_slice(bytes, config::standard())?;
    if read != bytes.len() {
        return Err(Error::TrailingBytes(bytes.len() - read));
    }
    Ok(value)
}

/// Writes a number to a file.
pub fn write_number_file<P: AsRef<Path>>(path: P, value: &BigInt) -> Result<()> {
    let bytes = encode(value)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(&bytes)?;
    file.flush()?;
    debug!(
        "wrote {} limbs ({} bytes) to {}",
        value.len(),
        bytes.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Reads a number written by [`write_number_file`].
pub fn read_number_file<P: AsRef<Path>>(path: P) -> Result<BigInt> {
    let mut file = File::open(path.as_ref())?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    let value = decode(&bytes)?;
    debug!(
        "read {} limbs ({} bytes) from {}",
        value.len(),
        bytes.len(),
        path.as_ref().display()
    );
    Ok(value)
}

use super::encryption::KdfParams;
use crate::errors::CoreError;

/// Magic bytes identifying an NWTK (Networth Tracker) file.
pub const MAGIC: &[u8; 4] = b"NWTK";

/// Current file format version.
pub const CURRENT_VERSION: u16 = 1;

/// Fixed header size in bytes:
/// magic(4) + version(2) + kdf_params(12) + salt(16) + nonce(12) = 46.
/// Everything after the header is ciphertext, running to the end of the
/// buffer — truncation is caught by the AES-GCM authentication tag.
pub const HEADER_SIZE: usize = 46;

/// Header parsed from an encrypted .nwtk file.
#[derive(Debug)]
pub struct FileHeader {
    pub version: u16,
    pub kdf_params: KdfParams,
    pub salt: [u8; 16],
    pub nonce: [u8; 12],
}

/// Assemble a complete encrypted file.
///
/// Layout:
/// ```text
/// [NWTK: 4B] [version: 2B LE] [memory_cost: 4B LE] [time_cost: 4B LE]
/// [parallelism: 4B LE] [salt: 16B] [nonce: 12B] [ciphertext: rest]
/// ```
pub fn write_file(
    version: u16,
    kdf_params: &KdfParams,
    salt: &[u8; 16],
    nonce: &[u8; 12],
    ciphertext: &[u8],
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE + ciphertext.len());

    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&version.to_le_bytes());
    buf.extend_from_slice(&kdf_params.memory_cost.to_le_bytes());
    buf.extend_from_slice(&kdf_params.time_cost.to_le_bytes());
    buf.extend_from_slice(&kdf_params.parallelism.to_le_bytes());
    buf.extend_from_slice(salt);
    buf.extend_from_slice(nonce);
    buf.extend_from_slice(ciphertext);

    buf
}

/// Parse the header from raw file bytes.
/// Returns the header and the ciphertext slice (the rest of the file).
pub fn read_file(data: &[u8]) -> Result<(FileHeader, &[u8]), CoreError> {
    if data.len() < HEADER_SIZE {
        return Err(CoreError::InvalidFileFormat(
            "File too small to be a valid NWTK file".into(),
        ));
    }

    if &data[0..4] != MAGIC {
        return Err(CoreError::InvalidFileFormat(
            "Invalid magic bytes — not an NWTK file".into(),
        ));
    }

    let version = u16::from_le_bytes([data[4], data[5]]);
    if version == 0 || version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(version));
    }

    let read_u32 = |offset: usize, field: &str| -> Result<u32, CoreError> {
        data[offset..offset + 4]
            .try_into()
            .map(u32::from_le_bytes)
            .map_err(|_| CoreError::InvalidFileFormat(format!("Failed to read KDF {field}")))
    };
    let memory_cost = read_u32(6, "memory_cost")?;
    let time_cost = read_u32(10, "time_cost")?;
    let parallelism = read_u32(14, "parallelism")?;

    // Sanity-bound the KDF params so a crafted file can't pin the CPU
    // or allocate gigabytes during key derivation.
    // memory_cost: 8 KiB (Argon2 minimum) ..= 1 GiB
    if !(8..=1_048_576).contains(&memory_cost) {
        return Err(CoreError::InvalidFileFormat(format!(
            "KDF memory_cost out of safe range: {memory_cost} KiB (expected 8..1048576)"
        )));
    }
    if !(1..=20).contains(&time_cost) {
        return Err(CoreError::InvalidFileFormat(format!(
            "KDF time_cost out of safe range: {time_cost} (expected 1..20)"
        )));
    }
    if !(1..=16).contains(&parallelism) {
        return Err(CoreError::InvalidFileFormat(format!(
            "KDF parallelism out of safe range: {parallelism} (expected 1..16)"
        )));
    }

    let mut salt = [0u8; 16];
    salt.copy_from_slice(&data[18..34]);

    let mut nonce = [0u8; 12];
    nonce.copy_from_slice(&data[34..46]);

    let header = FileHeader {
        version,
        kdf_params: KdfParams {
            memory_cost,
            time_cost,
            parallelism,
        },
        salt,
        nonce,
    };

    Ok((header, &data[HEADER_SIZE..]))
}

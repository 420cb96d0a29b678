//! `Context`: the public dispatch type holding a validated (mode, algorithm,
//! key, radix) tuple and its initialized block-cipher adapter.
//!
//! A `Context` is constructed once per `(mode, algo, key, radix)` tuple and
//! then used for many `encrypt`/`decrypt` calls. Re-initializing in place is
//! modeled the idiomatic way — build a new `Context` and drop the old one,
//! which runs `Drop`/`zeroize` on the superseded key material.

use crate::cipher::{Algorithm, Cipher};
use crate::error::{Error, Result};
use crate::{ff1, ff3, ff3_1};

use zeroize::{Zeroize, ZeroizeOnDrop};

pub const MIN_RADIX: usize = 2;
pub const MAX_RADIX: usize = 65536;

/// Which Feistel construction a `Context` dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ff1,
    /// Deprecated, retained only for interoperating with data encrypted
    /// before NIST's FF3-1 correction. Prefer `Ff31` for new data.
    Ff3,
    Ff31,
}

/// A validated `(mode, algorithm, key, radix)` tuple plus its initialized
/// block-cipher adapter.
///
/// Not `Sync`-safe for concurrent `encrypt`/`decrypt` calls from multiple
/// threads against one instance: the underlying adapter's CBC encryptor
/// advances internal state as FF1's PRF chains blocks (see `crate::ff1`).
/// Share a `Context` across threads only behind external mutual exclusion,
/// or give each thread its own `Context` built from the same key.
pub struct Context {
    mode: Mode,
    radix: u32,
    key: KeyMaterial,
    cipher: Cipher,
}

/// Raw key bytes (and, for FF3/FF3-1, the byte-reversed copy actually fed
/// to the cipher) held only so they can be wiped on drop; the `Cipher`
/// itself holds no raw key bytes once constructed; the RustCrypto types
/// it wraps expand keys into round-key schedules internally and are not
/// zeroized here.
#[derive(Zeroize, ZeroizeOnDrop)]
struct KeyMaterial {
    bytes: Vec<u8>,
}

fn validate_radix(radix: usize) -> Result<u32> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(Error::InvalidRadix(radix));
    }
    Ok(radix as u32)
}

impl Context {
    /// Validates `radix`, `key`'s length against `algo`, and constructs the
    /// block-cipher adapter. For `Ff3`/`Ff31`, the adapter is keyed with the
    /// byte-reversed key, per `crate::cipher`'s contract for those modes.
    pub fn new(mode: Mode, algo: Algorithm, key: &[u8], radix: usize) -> Result<Context> {
        let radix = validate_radix(radix)?;

        let keyed_bytes = match mode {
            Mode::Ff1 => key.to_vec(),
            Mode::Ff3 | Mode::Ff31 => key.iter().rev().copied().collect(),
        };

        let cipher = Cipher::new(algo, &keyed_bytes)?;

        Ok(Context {
            mode,
            radix,
            key: KeyMaterial { bytes: keyed_bytes },
            cipher,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    fn validate_digits(&self, digits: &[u16]) -> Result<()> {
        for (index, &digit) in digits.iter().enumerate() {
            if digit as usize >= self.radix as usize {
                return Err(Error::InvalidDigit {
                    index,
                    digit,
                    radix: self.radix as usize,
                });
            }
        }
        Ok(())
    }

    fn validate_lengths(&self, input: &[u16], output: &[u16]) -> Result<()> {
        if input.len() != output.len() {
            return Err(Error::InvalidLength(format!(
                "input length {} does not match output length {}",
                input.len(),
                output.len()
            )));
        }
        if input.len() < 2 {
            return Err(Error::InvalidLength(format!(
                "numeral string must have at least 2 digits, got {}",
                input.len()
            )));
        }
        Ok(())
    }

    /// Encrypt `input` into `output`. `input` and `output` may alias the
    /// same buffer; each engine copies its working halves out before
    /// writing anything back.
    pub fn encrypt(&self, input: &[u16], output: &mut [u16], tweak: &[u8]) -> Result<()> {
        self.validate_lengths(input, output)?;
        self.validate_digits(input)?;

        match self.mode {
            Mode::Ff1 => ff1::encrypt(&self.cipher, self.radix, input, output, tweak),
            Mode::Ff3 => ff3::encrypt(&self.cipher, self.radix, input, output, tweak),
            Mode::Ff31 => ff3_1::encrypt(&self.cipher, self.radix, input, output, tweak),
        }
    }

    /// Decrypt `input` into `output`. Same aliasing and validation
    /// contract as `encrypt`.
    pub fn decrypt(&self, input: &[u16], output: &mut [u16], tweak: &[u8]) -> Result<()> {
        self.validate_lengths(input, output)?;
        self.validate_digits(input)?;

        match self.mode {
            Mode::Ff1 => ff1::decrypt(&self.cipher, self.radix, input, output, tweak),
            Mode::Ff3 => ff3::decrypt(&self.cipher, self.radix, input, output, tweak),
            Mode::Ff31 => ff3_1::decrypt(&self.cipher, self.radix, input, output, tweak),
        }
    }
}

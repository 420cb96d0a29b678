//! Single-block ECB encryption, selectable between AES and SM4.
//!
//! The FFX constructions never chain blocks through a real CBC IV: every
//! independent encryption call starts the encryptor fresh from a key-only
//! state with a zero IV. A `cbc::Encryptor` reset this way on every call is
//! operationally identical to ECB, and reusing it within a single call (the
//! CBC-MAC step of FF1's PRF, see `crate::ff1`) gets the chaining for free.

use crate::error::{Error, Result};

use aes::cipher::BlockEncryptMut;
use aes::cipher::BlockSizeUser;
use aes::cipher::KeyIvInit;

/// The underlying block cipher and key size selected for a `Context`.
///
/// SM4 only supports a single 128-bit key size; AES supports all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Aes128,
    Aes192,
    Aes256,
    Sm4_128,
}

impl Algorithm {
    /// Expected raw key length in bytes for this algorithm.
    pub fn key_len(&self) -> usize {
        match self {
            Algorithm::Aes128 => 16,
            Algorithm::Aes192 => 24,
            Algorithm::Aes256 => 32,
            Algorithm::Sm4_128 => 16,
        }
    }
}

#[derive(Clone)]
enum CbcType {
    Aes128(cbc::Encryptor<aes::Aes128>),
    Aes192(cbc::Encryptor<aes::Aes192>),
    Aes256(cbc::Encryptor<aes::Aes256>),
    Sm4_128(cbc::Encryptor<sm4::Sm4>),
}

/// A single-block ECB-equivalent encryptor over a fixed key.
///
/// Internally this chains like CBC: each `encrypt_block` call XORs its input
/// with the previous call's output before encrypting, starting from the zero
/// IV the cipher was constructed with. Independent, ECB-style single-block
/// encryption therefore requires a fresh (or freshly cloned) `Cipher` per
/// call — this is how `crate::ff1`'s `ciph`/`crate::ff3`'s `round_function`
/// use it, while `crate::ff1`'s `prf` deliberately reuses one `Cipher` across
/// several calls to get CBC-MAC chaining for free. Disables block-cipher
/// padding implicitly (only whole 16-byte blocks are ever passed in).
#[derive(Clone)]
pub struct Cipher {
    enc: CbcType,
}

macro_rules! construct_cipher {
    ($variant:ident, $cipher:ty, $key:expr, $iv:expr) => {
        CbcType::$variant(cbc::Encryptor::<$cipher>::new($key.into(), $iv.into()))
    };
}

impl Cipher {
    pub fn new(algo: Algorithm, key: &[u8]) -> Result<Cipher> {
        if key.len() != algo.key_len() {
            return Err(Error::InvalidAlgorithm(format!(
                "{:?} requires a {}-byte key, got {}",
                algo,
                algo.key_len(),
                key.len()
            )));
        }

        const IV: &[u8] = &[0u8; 16];

        let enc = match algo {
            Algorithm::Aes128 => construct_cipher!(Aes128, aes::Aes128, key, IV),
            Algorithm::Aes192 => construct_cipher!(Aes192, aes::Aes192, key, IV),
            Algorithm::Aes256 => construct_cipher!(Aes256, aes::Aes256, key, IV),
            Algorithm::Sm4_128 => construct_cipher!(Sm4_128, sm4::Sm4, key, IV),
        };

        Ok(Cipher { enc })
    }

    /// Encrypt a single 16-byte block. `src` and `dst` must each be exactly
    /// the cipher's block size (always 16 for the algorithms this crate
    /// supports).
    pub fn encrypt_block(&mut self, src: &[u8], dst: &mut [u8]) {
        match &mut self.enc {
            CbcType::Aes128(e) => e.encrypt_block_b2b_mut(src.into(), dst.into()),
            CbcType::Aes192(e) => e.encrypt_block_b2b_mut(src.into(), dst.into()),
            CbcType::Aes256(e) => e.encrypt_block_b2b_mut(src.into(), dst.into()),
            CbcType::Sm4_128(e) => e.encrypt_block_b2b_mut(src.into(), dst.into()),
        }
    }

    pub fn block_size(&self) -> usize {
        match &self.enc {
            CbcType::Aes128(_) => aes::Aes128::block_size(),
            CbcType::Aes192(_) => aes::Aes192::block_size(),
            CbcType::Aes256(_) => aes::Aes256::block_size(),
            CbcType::Sm4_128(_) => sm4::Sm4::block_size(),
        }
    }
}

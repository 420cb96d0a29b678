//! FF3: the original (now deprecated) 8-round Feistel construction.
//!
//! FF3 was weakened by the 2017/2020 cryptanalysis that led NIST to publish
//! the corrected FF3-1 tweak derivation; it is retained here only for
//! compatibility with data encrypted before that revision. Prefer
//! [`crate::ff3_1`] for anything new. The `Context` built around this module
//! requires callers to name the mode explicitly (`Mode::Ff3`), never as a
//! default.
//!
//! The round structure, including the byte-reversal around the block cipher
//! and the digit-reversed numeral encoding, is shared verbatim with FF3-1
//! (see `cipher_digits` below); the only difference between the two modes
//! is how the two 4-byte tweak halves are derived from the caller's tweak,
//! which `crate::ff3_1` implements separately and feeds into this module's
//! round loop.

use crate::cipher::Cipher;
use crate::codec;
use crate::error::{Error, Result};

pub const MAX_LEN: usize = 256;

pub(crate) enum Direction {
    Encrypt,
    Decrypt,
}

/// Derive the legacy FF3 tweak halves: a plain 4+4 byte split, no
/// nibble-splitting (contrast `crate::ff3_1::derive_halves`).
pub(crate) fn derive_halves(tweak: &[u8]) -> Result<([u8; 4], [u8; 4])> {
    let mut tl = [0u8; 4];
    let mut tr = [0u8; 4];
    match tweak.len() {
        0 => {}
        7 => {
            tl.copy_from_slice(&tweak[0..4]);
            tr[0..3].copy_from_slice(&tweak[4..7]);
        }
        8 => {
            tl.copy_from_slice(&tweak[0..4]);
            tr.copy_from_slice(&tweak[4..8]);
        }
        n => {
            return Err(Error::InvalidTweakLength(format!(
                "FF3 requires a tweak of 0, 7, or 8 bytes, got {}",
                n
            )))
        }
    }
    Ok((tl, tr))
}

fn validate_text_len(n: usize) -> Result<()> {
    if n < 2 {
        return Err(Error::InvalidLength(format!(
            "FF3 requires at least 2 digits, got {}",
            n
        )));
    }
    if n > MAX_LEN {
        return Err(Error::InvalidLength(format!(
            "FF3 input exceeds the library cap of {} digits, got {}",
            MAX_LEN, n
        )));
    }
    Ok(())
}

/// One Feistel round's keyed function: builds the 16-byte block from the
/// chosen tweak half, the round index and `B`'s digit-reversed encoding,
/// reverses it, encrypts, and reverses the result back.
fn round_function(cipher: &Cipher, t_round: &[u8; 4], round: u8, b: &[u16], radix: u32) -> [u8; 16] {
    let mut block = [0u8; 16];
    block[0..4].copy_from_slice(t_round);
    block[3] ^= round;
    codec::num_to_bytes_rev(b, radix, &mut block[4..16]);

    block.reverse();
    let mut c = cipher.clone();
    let mut out = [0u8; 16];
    c.encrypt_block(&block, &mut out);
    out.reverse();
    out
}

/// Shared FF3/FF3-1 round loop, parameterized by the already-derived tweak
/// halves.
pub(crate) fn cipher_digits(
    cipher: &Cipher,
    radix: u32,
    input: &[u16],
    output: &mut [u16],
    tl: &[u8; 4],
    tr: &[u8; 4],
    direction: Direction,
) -> Result<()> {
    let n = input.len();
    validate_text_len(n)?;
    if output.len() != n {
        return Err(Error::InvalidLength(
            "input and output numeral strings must have equal length".into(),
        ));
    }

    let u = n.div_ceil(2);
    let v = n - u;

    let mut a = input[..u].to_vec();
    let mut b = input[u..].to_vec();

    let round_indices: Vec<u8> = match direction {
        Direction::Encrypt => (0..8).collect(),
        Direction::Decrypt => (0..8).rev().collect(),
    };

    for round in round_indices {
        if matches!(direction, Direction::Decrypt) {
            std::mem::swap(&mut a, &mut b);
        }

        let t_round = if round % 2 == 0 { tr } else { tl };
        let w = round_function(cipher, t_round, round, &b, radix);

        let m_cur = a.len();
        let mut y_digits = vec![0u16; m_cur];
        codec::bytes_to_num_rev(&w, radix, &mut y_digits);

        match direction {
            Direction::Encrypt => codec::add_reversed(&mut a, &y_digits, radix),
            Direction::Decrypt => codec::sub_reversed(&mut a, &y_digits, radix),
        }

        if matches!(direction, Direction::Encrypt) {
            std::mem::swap(&mut a, &mut b);
        }
    }

    output[..u].copy_from_slice(&a);
    output[u..].copy_from_slice(&b);
    Ok(())
}

pub fn encrypt(
    cipher: &Cipher,
    radix: u32,
    plaintext: &[u16],
    ciphertext: &mut [u16],
    tweak: &[u8],
) -> Result<()> {
    let (tl, tr) = derive_halves(tweak)?;
    cipher_digits(cipher, radix, plaintext, ciphertext, &tl, &tr, Direction::Encrypt)
}

pub fn decrypt(
    cipher: &Cipher,
    radix: u32,
    ciphertext: &[u16],
    plaintext: &mut [u16],
    tweak: &[u8],
) -> Result<()> {
    let (tl, tr) = derive_halves(tweak)?;
    cipher_digits(cipher, radix, ciphertext, plaintext, &tl, &tr, Direction::Decrypt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::Algorithm;

    fn reversed_key(key: &[u8]) -> Vec<u8> {
        let mut k = key.to_vec();
        k.reverse();
        k
    }

    #[test]
    fn round_trips_with_various_tweak_lengths() {
        let key = reversed_key(&[0u8; 16]);
        let cipher = Cipher::new(Algorithm::Aes128, &key).unwrap();
        let pt = [1u16, 2, 3, 4, 5, 6, 7, 8];

        for tweak in [vec![], vec![0u8; 7], vec![0u8; 8]] {
            let mut ct = [0u16; 8];
            encrypt(&cipher, 10, &pt, &mut ct, &tweak).unwrap();
            let mut back = [0u16; 8];
            decrypt(&cipher, 10, &ct, &mut back, &tweak).unwrap();
            assert_eq!(back, pt, "round-trip failed for tweak len {}", tweak.len());
        }
    }

    #[test]
    fn rejects_bad_tweak_length() {
        let key = reversed_key(&[0u8; 16]);
        let cipher = Cipher::new(Algorithm::Aes128, &key).unwrap();
        let pt = [1u16, 2, 3, 4];
        let mut ct = [0u16; 4];
        let res = encrypt(&cipher, 10, &pt, &mut ct, &[0u8; 5]);
        assert!(matches!(res, Err(Error::InvalidTweakLength(_))));
    }

    #[test]
    fn odd_length_splits_ceiling_to_a() {
        // u = ceil(m/2); for m=7 that's 4, not 3.
        let key = reversed_key(&[0u8; 16]);
        let cipher = Cipher::new(Algorithm::Aes128, &key).unwrap();
        let pt = [1u16, 2, 3, 4, 5, 6, 7];
        let mut ct = [0u16; 7];
        encrypt(&cipher, 10, &pt, &mut ct, &[]).unwrap();
        let mut back = [0u16; 7];
        decrypt(&cipher, 10, &ct, &mut back, &[]).unwrap();
        assert_eq!(back, pt);
    }
}

//! FF1: a 10-round Feistel construction using a PRF built from CBC-MAC over
//! a fixed prefix and the tweak, extended by counter-mode to the needed
//! output width.
//!
//! The tweak may be any length, including zero. The numeral string length
//! `m` must be at least 2; this module additionally enforces the library's
//! documented `m <= 256` cap so the `A`/`B` working buffers stay bounded.

use crate::cipher::Cipher;
use crate::codec;
use crate::error::{Error, Result};

use byteorder::ByteOrder;

pub const MAX_LEN: usize = 256;

enum Direction {
    Encrypt,
    Decrypt,
}

/// Run the CBC-MAC/counter-mode PRF this engine is built on.
///
/// `cipher` is the Context's pristine, zero-IV block cipher; a fresh clone
/// is taken so the chain starts over on every call, while the clone is
/// reused across the multiple blocks of `blocks` to get CBC-MAC chaining
/// between them for free (the `cbc::Encryptor` inside `Cipher` XORs each
/// new block with the previous block's ciphertext before encrypting).
fn prf(cipher: &Cipher, blocks: &[u8]) -> [u8; 16] {
    let mut c = cipher.clone();
    let blksz = c.block_size();
    let mut out = [0u8; 16];
    for chunk in blocks.chunks(blksz) {
        let mut dst = [0u8; 16];
        c.encrypt_block(chunk, &mut dst);
        out = dst;
    }
    out
}

/// Single-block ECB encryption against a fresh cipher instance, used for
/// the counter-mode extension beyond the first 16 bytes of `S`.
fn ciph(cipher: &Cipher, block: &[u8; 16]) -> [u8; 16] {
    let mut c = cipher.clone();
    let mut out = [0u8; 16];
    c.encrypt_block(block, &mut out);
    out
}

fn validate_text_len(n: usize) -> Result<()> {
    if n < 2 {
        return Err(Error::InvalidLength(format!(
            "FF1 requires at least 2 digits, got {}",
            n
        )));
    }
    if n > MAX_LEN {
        return Err(Error::InvalidLength(format!(
            "FF1 input exceeds the library cap of {} digits, got {}",
            MAX_LEN, n
        )));
    }
    Ok(())
}

fn cipher_digits(
    cipher: &Cipher,
    radix: u32,
    input: &[u16],
    output: &mut [u16],
    tweak: &[u8],
    direction: Direction,
) -> Result<()> {
    let n = input.len();
    validate_text_len(n)?;
    if output.len() != n {
        return Err(Error::InvalidLength(
            "input and output numeral strings must have equal length".into(),
        ));
    }

    let u = n / 2;
    let v = n - u;

    let mut a = input[..u].to_vec();
    let mut b = input[u..].to_vec();

    let b_width = codec::ceil_log2_pow(radix, v).div_ceil(8);
    let d = 4 * b_width.div_ceil(4) + 4;

    let mut p = [0u8; 16];
    p[0] = 1;
    p[1] = 2;
    p[2] = 1;
    byteorder::BigEndian::write_u24(&mut p[3..6], radix);
    p[6] = 0x0A;
    p[7] = (u % 256) as u8;
    byteorder::BigEndian::write_u32(&mut p[8..12], n as u32);
    byteorder::BigEndian::write_u32(&mut p[12..16], tweak.len() as u32);

    let q_pad = (16 - ((tweak.len() + b_width + 1) % 16)) % 16;
    let mut q = vec![0u8; tweak.len() + q_pad + 1 + b_width];
    q[..tweak.len()].copy_from_slice(tweak);

    let mut blocks = vec![0u8; 16 + q.len()];

    if matches!(direction, Direction::Decrypt) {
        std::mem::swap(&mut a, &mut b);
    }

    for round in 0..10u8 {
        let round_byte = match direction {
            Direction::Encrypt => round,
            Direction::Decrypt => 9 - round,
        };

        let q_len = q.len();
        q[q_len - b_width - 1] = round_byte;
        codec::num_to_bytes(&b, radix, &mut q[q_len - b_width..]);

        blocks[..16].copy_from_slice(&p);
        blocks[16..].copy_from_slice(&q);

        let mut r = prf(cipher, &blocks);

        let block_count = d.div_ceil(16);
        let mut s = Vec::with_capacity(block_count * 16);
        s.extend_from_slice(&r);
        for k in 1..block_count as u32 {
            let w = byteorder::BigEndian::read_u32(&r[12..16]);
            byteorder::BigEndian::write_u32(&mut r[12..16], w ^ k);
            s.extend_from_slice(&ciph(cipher, &r));
            byteorder::BigEndian::write_u32(&mut r[12..16], w);
        }
        s.truncate(d);

        // `a`'s length alternates between `u` and `v` each round because the
        // whole buffer, not just its contents, is swapped below; reading it
        // back gives the correct modulus length for both directions without
        // tracking round parity separately (decryption starts from the
        // swapped halves, so a naive `round % 2` check would invert it).
        let m_cur = a.len();
        let mut y_digits = vec![0u16; m_cur];
        codec::bytes_to_num(&s, radix, &mut y_digits);

        match direction {
            Direction::Encrypt => codec::add_natural(&mut a, &y_digits, radix),
            Direction::Decrypt => codec::sub_natural(&mut a, &y_digits, radix),
        }

        std::mem::swap(&mut a, &mut b);
    }

    if matches!(direction, Direction::Decrypt) {
        std::mem::swap(&mut a, &mut b);
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
    cipher_digits(cipher, radix, plaintext, ciphertext, tweak, Direction::Encrypt)
}

pub fn decrypt(
    cipher: &Cipher,
    radix: u32,
    ciphertext: &[u16],
    plaintext: &mut [u16],
    tweak: &[u8],
) -> Result<()> {
    cipher_digits(cipher, radix, ciphertext, plaintext, tweak, Direction::Decrypt)
}

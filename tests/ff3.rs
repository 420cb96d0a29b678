//! Integration tests for the legacy FF3 mode, run end-to-end through
//! `Context`.
//!
//! NIST never published a corrected Appendix A vector set for the
//! original (pre-Rev.-1) FF3 tweak split — the 2017/2020 cryptanalysis is
//! exactly why Rev. 1 replaced it. These tests instead pin down the core
//! properties every mode must satisfy: round-trip, tweak sensitivity, and
//! length coverage across the odd/even split boundary.

use fpe::cipher::Algorithm;
use fpe::context::{Context, Mode};
use fpe::error::Result;

fn digits10(s: &str) -> Vec<u16> {
    s.chars().map(|c| c.to_digit(10).unwrap() as u16).collect()
}

const AES128_KEY: [u8; 16] = [
    0xEF, 0x43, 0x59, 0xD8, 0xD5, 0x80, 0xAA, 0x4F, 0x7F, 0x03, 0x6D, 0x6F, 0x04, 0xFC, 0x6A, 0x94,
];

#[test]
fn round_trips_across_key_sizes() -> Result<()> {
    let pt = digits10("890121234567890000");
    let tweak = [0x9u8, 0x47, 0x2d, 0x50, 0x78, 0x0, 0x0];

    let keys: [&[u8]; 3] = [
        &AES128_KEY,
        &[
            0xEF, 0x43, 0x59, 0xD8, 0xD5, 0x80, 0xAA, 0x4F, 0x7F, 0x03, 0x6D, 0x6F, 0x04, 0xFC,
            0x6A, 0x94, 0x2B, 0x7E, 0x15, 0x16, 0x28, 0xAE, 0xD2, 0xA6,
        ],
        &[
            0xEF, 0x43, 0x59, 0xD8, 0xD5, 0x80, 0xAA, 0x4F, 0x7F, 0x03, 0x6D, 0x6F, 0x04, 0xFC,
            0x6A, 0x94, 0x2B, 0x7E, 0x15, 0x16, 0x28, 0xAE, 0xD2, 0xA6, 0xAB, 0xF7, 0x15, 0x88,
            0x09, 0xCF, 0x4F, 0x3C,
        ],
    ];
    let algos = [Algorithm::Aes128, Algorithm::Aes192, Algorithm::Aes256];

    for (key, algo) in keys.iter().zip(algos) {
        let ctx = Context::new(Mode::Ff3, algo, key, 10)?;
        let mut ct = vec![0u16; pt.len()];
        ctx.encrypt(&pt, &mut ct, &tweak)?;
        let mut back = vec![0u16; pt.len()];
        ctx.decrypt(&ct, &mut back, &tweak)?;
        assert_eq!(back, pt);
    }

    Ok(())
}

#[test]
fn round_trips_odd_and_even_lengths() -> Result<()> {
    let ctx = Context::new(Mode::Ff3, Algorithm::Aes128, &AES128_KEY, 10)?;
    let tweak = [0u8; 7];

    for len in [2usize, 3, 9, 18, 50, 101] {
        let pt: Vec<u16> = (0..len).map(|i| (i % 10) as u16).collect();
        let mut ct = vec![0u16; len];
        ctx.encrypt(&pt, &mut ct, &tweak)?;
        let mut back = vec![0u16; len];
        ctx.decrypt(&ct, &mut back, &tweak)?;
        assert_eq!(back, pt, "round-trip failed for length {}", len);
    }

    Ok(())
}

#[test]
fn no_tweak_and_explicit_zero_tweak_agree() -> Result<()> {
    let ctx = Context::new(Mode::Ff3, Algorithm::Aes128, &AES128_KEY, 10)?;
    let pt = digits10("0123456789");

    let mut ct_empty = vec![0u16; pt.len()];
    ctx.encrypt(&pt, &mut ct_empty, &[])?;

    let mut ct_zero7 = vec![0u16; pt.len()];
    ctx.encrypt(&pt, &mut ct_zero7, &[0u8; 7])?;

    assert_eq!(ct_empty, ct_zero7);

    Ok(())
}

#[test]
fn tweak_sensitivity() -> Result<()> {
    let ctx = Context::new(Mode::Ff3, Algorithm::Aes128, &AES128_KEY, 10)?;
    let pt = digits10("0123456789");

    let mut ct_a = vec![0u16; pt.len()];
    ctx.encrypt(&pt, &mut ct_a, &[1u8, 2, 3, 4, 5, 6, 7])?;

    let mut ct_b = vec![0u16; pt.len()];
    ctx.encrypt(&pt, &mut ct_b, &[1u8, 2, 3, 4, 5, 6, 8])?;

    assert_ne!(ct_a, ct_b);

    Ok(())
}

#[test]
fn rejects_unsupported_tweak_length() {
    let ctx = Context::new(Mode::Ff3, Algorithm::Aes128, &AES128_KEY, 10).unwrap();
    let pt = digits10("0123456789");
    let mut ct = vec![0u16; pt.len()];
    let res = ctx.encrypt(&pt, &mut ct, &[0u8; 6]);
    assert!(res.is_err());
}

#[test]
fn diverges_from_ff31_on_same_key_and_tweak() -> Result<()> {
    let tweak = [0x11u8, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77];
    let pt = digits10("0123456789");

    let ff3 = Context::new(Mode::Ff3, Algorithm::Aes128, &AES128_KEY, 10)?;
    let mut ct_ff3 = vec![0u16; pt.len()];
    ff3.encrypt(&pt, &mut ct_ff3, &tweak)?;

    let ff31 = Context::new(Mode::Ff31, Algorithm::Aes128, &AES128_KEY, 10)?;
    let mut ct_ff31 = vec![0u16; pt.len()];
    ff31.encrypt(&pt, &mut ct_ff31, &tweak)?;

    assert_ne!(ct_ff3, ct_ff31);

    Ok(())
}

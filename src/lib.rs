//! Format-Preserving Encryption
//!
//! Implements the three NIST SP 800-38G (and Revision 1) Feistel
//! constructions — FF1, the deprecated FF3, and its FF3-1 correction — over
//! AES-128/192/256 and SM4-128. Format-preserving encryption means the
//! ciphertext is drawn from the same alphabet as the plaintext: encrypting a
//! 16-digit card number yields another 16-digit number, not opaque bytes.
//!
//! [`context::Context`] is the entry point: it validates a `(mode, algorithm,
//! key, radix)` tuple once, then serves many `encrypt`/`decrypt` calls
//! against numeral strings (`&[u16]`, one digit per element, each less than
//! `radix`). [`alphabet::Alphabet`] is an optional layer on top for callers
//! who'd rather work with strings over a fixed character set.
//!
//! # Example
//! ```rust
//! use fpe::context::{Context, Mode};
//! use fpe::cipher::Algorithm;
//!
//! let key = [
//!     0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
//!     0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
//! ];
//! let ctx = Context::new(Mode::Ff1, Algorithm::Aes128, &key, 10).unwrap();
//!
//! let pt = [0u16, 1, 2, 3, 4, 5, 6, 7, 8, 9];
//! let mut ct = [0u16; 10];
//! ctx.encrypt(&pt, &mut ct, &[]).unwrap();
//! assert_eq!(ct, [2, 4, 3, 3, 4, 7, 7, 4, 8, 4]);
//!
//! let mut back = [0u16; 10];
//! ctx.decrypt(&ct, &mut back, &[]).unwrap();
//! assert_eq!(back, pt);
//! ```

pub mod alphabet;
pub mod cipher;
pub(crate) mod codec;
pub mod context;
pub mod error;
pub(crate) mod ff1;
pub(crate) mod ff3;
pub(crate) mod ff3_1;

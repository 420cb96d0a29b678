//! Numeral-string <-> big-endian byte buffer conversion, and the digit-array
//! modular add/subtract used to update a Feistel half in place.
//!
//! `num_bigint`'s radix-aware big integer conversion only supports a radix
//! up to 256, and this crate needs radix up to 65536, so this module instead
//! uses the schoolbook long multiplication/division a C reference
//! implementation's `ff1.c`/`ff3-1.c` use directly over a byte buffer —
//! unbounded in radix, bounded only by the caller-chosen buffer width.
//!
//! Two numeral orderings are supported: "natural" (FF1: digit index 0 is
//! most significant) and "reversed" (FF3 family: digit index 0 is least
//! significant).

/// Encode `digits` (natural ordering: `digits[0]` most significant) as a
/// fixed-width big-endian byte integer in `out`.
///
/// `out` is zeroed first; if `out` is too narrow to hold
/// `Σ digits[i] * radix^(m-1-i)` the high-order bits are silently dropped,
/// exactly as the reference schoolbook implementation does — callers size
/// `out` to the integer's true width.
pub fn num_to_bytes(digits: &[u16], radix: u32, out: &mut [u8]) {
    out.fill(0);

    for &digit in digits {
        let mut carry = digit as u64;
        for byte in out.iter_mut().rev() {
            let tmp = (*byte as u64) * (radix as u64) + carry;
            *byte = (tmp & 0xFF) as u8;
            carry = tmp >> 8;
        }
    }
}

/// Inverse of `num_to_bytes`: decode a big-endian byte integer into
/// `digits.len()` digits (natural ordering).
pub fn bytes_to_num(bytes: &[u8], radix: u32, digits: &mut [u16]) {
    let mut temp = bytes.to_vec();

    for digit in digits.iter_mut().rev() {
        let mut remainder: u64 = 0;
        for byte in temp.iter_mut() {
            let tmp = (remainder << 8) | (*byte as u64);
            *byte = (tmp / radix as u64) as u8;
            remainder = tmp % radix as u64;
        }
        *digit = remainder as u16;
    }
}

/// Encode `digits` (reversed ordering: `digits[0]` least significant) as a
/// fixed-width big-endian byte integer in `out` — the FF3/FF3-1 numeral
/// encoding.
pub fn num_to_bytes_rev(digits: &[u16], radix: u32, out: &mut [u8]) {
    out.fill(0);

    for &digit in digits.iter().rev() {
        let mut carry = digit as u64;
        for byte in out.iter_mut().rev() {
            let tmp = (*byte as u64) * (radix as u64) + carry;
            *byte = (tmp & 0xFF) as u8;
            carry = tmp >> 8;
        }
    }
}

/// Inverse of `num_to_bytes_rev` (reversed ordering).
pub fn bytes_to_num_rev(bytes: &[u8], radix: u32, digits: &mut [u16]) {
    let mut temp = bytes.to_vec();

    for digit in digits.iter_mut() {
        let mut remainder: u64 = 0;
        for byte in temp.iter_mut() {
            let tmp = (remainder << 8) | (*byte as u64);
            *byte = (tmp / radix as u64) as u8;
            remainder = tmp % radix as u64;
        }
        *digit = remainder as u16;
    }
}

/// `a := (a + y) mod radix^len`, natural ordering (`a[len-1]` least
/// significant, carry propagates right to left). Used by FF1.
pub fn add_natural(a: &mut [u16], y: &[u16], radix: u32) {
    debug_assert_eq!(a.len(), y.len());
    let mut carry: u32 = 0;
    for j in (0..a.len()).rev() {
        let sum = a[j] as u32 + y[j] as u32 + carry;
        a[j] = (sum % radix) as u16;
        carry = sum / radix;
    }
}

/// `a := (a - y) mod radix^len`, natural ordering. Used by FF1.
pub fn sub_natural(a: &mut [u16], y: &[u16], radix: u32) {
    debug_assert_eq!(a.len(), y.len());
    let mut borrow: i64 = 0;
    for j in (0..a.len()).rev() {
        let mut diff = a[j] as i64 - y[j] as i64 - borrow;
        if diff < 0 {
            diff += radix as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        a[j] = diff as u16;
    }
}

/// `a := (a + y) mod radix^len`, reversed ordering (`a[0]` least
/// significant, carry propagates left to right). Used by FF3/FF3-1.
pub fn add_reversed(a: &mut [u16], y: &[u16], radix: u32) {
    debug_assert_eq!(a.len(), y.len());
    let mut carry: u32 = 0;
    for j in 0..a.len() {
        let sum = a[j] as u32 + y[j] as u32 + carry;
        a[j] = (sum % radix) as u16;
        carry = sum / radix;
    }
}

/// `a := (a - y) mod radix^len`, reversed ordering. Used by FF3/FF3-1.
pub fn sub_reversed(a: &mut [u16], y: &[u16], radix: u32) {
    debug_assert_eq!(a.len(), y.len());
    let mut borrow: i64 = 0;
    for j in 0..a.len() {
        let mut diff = a[j] as i64 - y[j] as i64 - borrow;
        if diff < 0 {
            diff += radix as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        a[j] = diff as u16;
    }
}

/// Exact integer computation of `ceil(exponent * log2(radix))`.
///
/// The reference C implementation computes this with `ceil(v * log2(radix))`
/// in double precision; doing the same here would make the byte widths `b`
/// and `d` that FF1/FF3/FF3-1 derive from this value depend on floating-point
/// rounding, which is not guaranteed identical across platforms. This
/// computes `radix^exponent` as a grown big-endian byte buffer (the same
/// schoolbook technique as the rest of this module) and reads the bit count
/// off its magnitude directly.
pub fn ceil_log2_pow(radix: u32, exponent: usize) -> usize {
    if exponent == 0 {
        return 0;
    }

    let mut magnitude: Vec<u8> = vec![1];
    for _ in 0..exponent {
        let mut carry: u64 = 0;
        for byte in magnitude.iter_mut().rev() {
            let tmp = (*byte as u64) * radix as u64 + carry;
            *byte = (tmp & 0xFF) as u8;
            carry = tmp >> 8;
        }
        while carry > 0 {
            magnitude.insert(0, (carry & 0xFF) as u8);
            carry >>= 8;
        }
    }

    let mut iter = magnitude.iter().copied().skip_while(|&b| b == 0);
    let bit_length = match iter.next() {
        None => 0,
        Some(first) => (8 - first.leading_zeros() as usize) + iter.count() * 8,
    };

    let set_bits: u32 = magnitude.iter().map(|b| b.count_ones()).sum();
    if set_bits == 1 {
        bit_length - 1
    } else {
        bit_length
    }
}

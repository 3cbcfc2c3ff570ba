// ============================================================================
// Radix Codec
// Conversion between digit strings and magnitudes
// ============================================================================
//
// Both directions work on chunks of `k` digits, where `radix^k` is the
// largest power of the radix that fits in a limb (10^19 for decimal). Parsing
// is a multiply-add per chunk; formatting peels chunks off with a short
// division by that power.

use super::errors::{ParseBigIntError, ParseErrorKind};
use super::limbs::{trimmed, Limb, LimbVec, Wide, LIMB_BITS};
use super::mul::mul_add_limb_assign;
use arrayvec::ArrayVec;

/// Supported radix range.
pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

/// Largest digit count of a single chunk (radix 2: 2^63 is the largest fitting power).
const MAX_CHUNK_DIGITS: usize = 64;

/// Parsed sign of a digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParsedSign {
    Plus,
    Minus,
}

/// Largest power of `radix` that fits in a limb, with its exponent.
#[inline]
pub(crate) fn chunk_base(radix: u32) -> (Limb, usize) {
    let r = radix as Limb;
    let mut base = r;
    let mut digits = 1;
    while let Some(next) = base.checked_mul(r) {
        base = next;
        digits += 1;
    }
    (base, digits)
}

#[inline]
fn digit_value(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some((byte - b'0') as u32),
        b'a'..=b'z' => Some((byte - b'a') as u32 + 10),
        b'A'..=b'Z' => Some((byte - b'A') as u32 + 10),
        _ => None,
    }
}

#[inline]
fn check_radix(radix: u32) -> Result<(), ParseBigIntError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(ParseBigIntError::new(ParseErrorKind::InvalidRadix(radix)))
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse an optionally signed digit string into (sign, magnitude).
pub(crate) fn parse_magnitude(
    s: &str,
    radix: u32,
) -> Result<(ParsedSign, LimbVec), ParseBigIntError> {
    check_radix(radix)?;

    let (sign, digits, offset) = match s.as_bytes().first() {
        Some(b'-') => (ParsedSign::Minus, &s[1..], 1),
        Some(b'+') => (ParsedSign::Plus, &s[1..], 1),
        _ => (ParsedSign::Plus, s, 0),
    };
    if digits.is_empty() {
        return Err(ParseBigIntError::new(ParseErrorKind::Empty));
    }

    let bytes = digits.as_bytes();
    let (base, chunk_digits) = chunk_base(radix);

    // The leading chunk takes the remainder so every later chunk is full.
    let head = match bytes.len() % chunk_digits {
        0 => chunk_digits,
        rem => rem,
    };

    let estimated_bits = (bytes.len() as f64 * (radix as f64).log2()).ceil() as usize;
    let mut magnitude = LimbVec::with_capacity(estimated_bits / LIMB_BITS as usize + 1);

    let mut start = 0;
    let mut end = head;
    while start < bytes.len() {
        let mut chunk: Limb = 0;
        for (i, &byte) in bytes[start..end].iter().enumerate() {
            match digit_value(byte).filter(|&d| d < radix) {
                Some(d) => chunk = chunk * radix as Limb + d as Limb,
                None => {
                    let index = offset + start + i;
                    let found = s[index..].chars().next().unwrap_or(byte as char);
                    return Err(ParseBigIntError::new(ParseErrorKind::InvalidDigit {
                        index,
                        found,
                    }));
                },
            }
        }

        // x * base + chunk; on the empty leading buffer this is just the chunk.
        mul_add_limb_assign(&mut magnitude, base, chunk);

        start = end;
        end += chunk_digits;
    }

    Ok((sign, magnitude))
}

// ============================================================================
// Formatting
// ============================================================================

/// DivAssign a single limb, returns the remainder. Short division, top limb first.
pub(crate) fn div_rem_limb_assign(x: &mut LimbVec, divisor: Limb) -> Limb {
    debug_assert!(divisor != 0);
    let mut rem: Wide = 0;
    for xi in x.iter_mut().rev() {
        let acc = (rem << LIMB_BITS) | *xi as Wide;
        *xi = (acc / divisor as Wide) as Limb;
        rem = acc % divisor as Wide;
    }
    super::limbs::normalize(x);
    rem as Limb
}

/// Render one chunk into ASCII digits, most significant first.
fn chunk_digits(mut chunk: Limb, radix: u32) -> ArrayVec<u8, MAX_CHUNK_DIGITS> {
    let mut digits = ArrayVec::new();
    while chunk != 0 {
        let d = (chunk % radix as Limb) as u8;
        digits.push(if d < 10 { b'0' + d } else { b'a' + d - 10 });
        chunk /= radix as Limb;
    }
    digits.reverse();
    digits
}

/// Render a magnitude as lowercase digits (no sign). Zero renders as `"0"`.
///
/// # Panics
/// If `radix` is outside 2..=36.
pub(crate) fn format_magnitude(x: &[Limb], radix: u32) -> String {
    assert!(
        (MIN_RADIX..=MAX_RADIX).contains(&radix),
        "radix must be within 2..=36"
    );

    let x = trimmed(x);
    if x.is_empty() {
        return "0".to_string();
    }

    let (base, digits_per_chunk) = chunk_base(radix);
    let mut remaining = LimbVec::from_slice(x);
    let mut chunks: Vec<Limb> = Vec::with_capacity(x.len() * 2);
    while !remaining.is_empty() {
        chunks.push(div_rem_limb_assign(&mut remaining, base));
    }

    let mut out = String::with_capacity(chunks.len() * digits_per_chunk);
    let mut iter = chunks.iter().rev();
    if let Some(&top) = iter.next() {
        out.extend(chunk_digits(top, radix).iter().map(|&b| b as char));
    }
    for &chunk in iter {
        let digits = chunk_digits(chunk, radix);
        for _ in digits.len()..digits_per_chunk {
            out.push('0');
        }
        out.extend(digits.iter().map(|&b| b as char));
    }
    out
}

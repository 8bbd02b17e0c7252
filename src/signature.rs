//! Identifier and signature handling.
//!
//! Ids are owned by the notebook application and only ever validated here.
//! Signatures are generated whenever existing state has none worth keeping.

use rand::rngs::OsRng;
use rand::RngCore;
use serde_json::Value;

/// Source of raw 64-bit values for signature generation.
///
/// Passed explicitly into reconciliation so tests can substitute a
/// deterministic sequence.
pub trait SignatureSource {
    fn next_u64(&mut self) -> u64;
}

/// Operating-system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSignatureSource;

impl SignatureSource for OsSignatureSource {
    fn next_u64(&mut self) -> u64 {
        OsRng.next_u64()
    }
}

/// Generate a positive 63-bit signature rendered as a decimal string.
pub fn generate_signature(source: &mut dyn SignatureSource) -> String {
    loop {
        let sig = source.next_u64() >> 1;
        if sig > 0 {
            return sig.to_string();
        }
    }
}

/// Parse an id-like value: a non-negative integer, or a string of ASCII
/// digits (surrounding whitespace ignored).
pub fn parse_id_like(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Number(n) => n.as_u64().map(|v| v.to_string()),
        Value::String(s) => {
            let s = s.trim();
            if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                Some(s.to_string())
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Parse a signature-like value. Same rules as ids, but zero means absent.
pub fn parse_signature_like(value: Option<&Value>) -> Option<String> {
    parse_id_like(value).filter(|s| s.bytes().any(|b| b != b'0'))
}

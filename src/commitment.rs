//! HMAC-SHA256 commitment to the computer's move.
//!
//! The engine draws a fresh key and a move, publishes
//! `HMAC-SHA256(key, move name)` and later hands the key over so anyone can
//! recompute the tag.

use crate::error::{FairplayError, Result};
use crate::moves::MoveIndex;
use hmac::{Hmac, Mac};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use serde::Serialize;
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Key size in bytes
pub const KEY_SIZE: usize = 32;

/// MAC size in bytes
pub const MAC_SIZE: usize = 32;

/// Decode exactly 32 bytes of hex, naming `what` in the length error
fn decode_hex32(s: &str, what: &'static str) -> Result<[u8; 32]> {
    let bytes = hex::decode(s.trim())?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| FairplayError::InvalidLength {
        what,
        expected: 32,
        actual,
    })
}

/// Per-session HMAC key
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_SIZE]);

impl SecretKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Parse a revealed key
    pub fn from_hex(s: &str) -> Result<Self> {
        decode_hex32(s, "key").map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

// Never print key material through Debug
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// Published tag binding the key to a move name
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment([u8; MAC_SIZE]);

impl Commitment {
    /// Compute `HMAC-SHA256(key, move_name)`
    pub fn new(key: &SecretKey, move_name: &str) -> Result<Self> {
        let mut mac = HmacSha256::new_from_slice(key.as_bytes())
            .map_err(|e| FairplayError::Mac(e.to_string()))?;
        mac.update(move_name.as_bytes());
        Ok(Self(mac.finalize().into_bytes().into()))
    }

    pub fn from_bytes(bytes: [u8; MAC_SIZE]) -> Self {
        Self(bytes)
    }

    /// Parse a published commitment
    pub fn from_hex(s: &str) -> Result<Self> {
        decode_hex32(s, "HMAC").map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; MAC_SIZE] {
        &self.0
    }

    /// Check that `key` and `move_name` produce this commitment.
    /// The comparison runs in constant time.
    pub fn verify(&self, key: &SecretKey, move_name: &str) -> Result<bool> {
        let mut mac = HmacSha256::new_from_slice(key.as_bytes())
            .map_err(|e| FairplayError::Mac(e.to_string()))?;
        mac.update(move_name.as_bytes());
        Ok(mac.verify_slice(&self.0).is_ok())
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Draws keys and moves from an injected cryptographic generator
pub struct CommitmentEngine<R> {
    rng: R,
}

impl CommitmentEngine<OsRng> {
    /// Engine backed by the operating system's generator
    pub fn system() -> Self {
        Self::new(OsRng)
    }
}

impl<R: RngCore + CryptoRng> CommitmentEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Fresh 32-byte key. Fails when the generator cannot deliver bytes.
    pub fn generate_key(&mut self) -> Result<SecretKey> {
        let mut bytes = [0u8; KEY_SIZE];
        self.rng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| FairplayError::Entropy(e.to_string()))?;
        Ok(SecretKey(bytes))
    }

    /// Uniform index in `[0, move_count)`.
    ///
    /// Rejection sampling over 64-bit draws keeps the choice unbiased for any
    /// count.
    pub fn choose_move(&mut self, move_count: usize) -> Result<MoveIndex> {
        if move_count == 0 {
            return Err(FairplayError::Usage("cannot choose from zero moves".into()));
        }

        let bound = move_count as u64;
        let zone = (u64::MAX / bound) * bound;
        loop {
            let mut buf = [0u8; 8];
            self.rng
                .try_fill_bytes(&mut buf)
                .map_err(|e| FairplayError::Entropy(e.to_string()))?;
            let value = u64::from_le_bytes(buf);
            if value < zone {
                return Ok(MoveIndex::new((value % bound) as usize));
            }
        }
    }

    pub fn commit(&self, key: &SecretKey, move_name: &str) -> Result<Commitment> {
        Commitment::new(key, move_name)
    }

    /// Hand the key over for display. Consumes it so a session reveals once.
    pub fn reveal(&self, key: SecretKey) -> [u8; KEY_SIZE] {
        key.0
    }
}

/// Outcome of checking a revealed key against a published commitment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    #[serde(rename = "move")]
    pub move_name: String,
    pub hmac: String,
    pub key: String,
    pub verified: bool,
}

impl VerificationReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Check a reveal given as hex strings, as printed by a session
pub fn verify_reveal(hmac_hex: &str, key_hex: &str, move_name: &str) -> Result<VerificationReport> {
    let commitment = Commitment::from_hex(hmac_hex)?;
    let key = SecretKey::from_hex(key_hex)?;
    let verified = commitment.verify(&key, move_name)?;

    Ok(VerificationReport {
        move_name: move_name.to_string(),
        hmac: commitment.to_string(),
        key: hex::encode(key.as_bytes()),
        verified,
    })
}

//! Bearer-token codec.
//!
//! Upstream session ids are obfuscated with a keyed substitution cipher
//! before being handed to clients, so the raw upstream id never appears on
//! the wire. This is obfuscation of an opaque identifier, not a security
//! primitive; the session's authority lives entirely upstream.

/// Keyed codec between upstream session ids and client-facing tokens.
///
/// The alphabet is `a-z`, `A-Z`, and `0-9`; each class wraps independently.
/// Encoding and decoding reject any input outside the alphabet.
///
/// # Examples
/// ```
/// use spektr_gateway::domain::token::TokenCipher;
///
/// let cipher = TokenCipher::new("k3y").expect("alphanumeric key");
/// let token = cipher.encode("abc123").expect("alphanumeric id");
/// assert_eq!(cipher.decode(&token).expect("round trip"), "abc123");
/// ```
#[derive(Clone)]
pub struct TokenCipher {
    key: String,
}

impl TokenCipher {
    /// Build a codec from a non-empty alphanumeric key.
    pub fn new(key: impl Into<String>) -> Result<Self, TokenCodecError> {
        let key = key.into();
        if key.is_empty() || !is_alphanumeric(&key) {
            return Err(TokenCodecError::InvalidKey);
        }
        Ok(Self { key })
    }

    /// Obfuscate an upstream session id into a client-facing token.
    pub fn encode(&self, session_id: &str) -> Result<String, TokenCodecError> {
        self.transform(session_id, Direction::Forward)
    }

    /// Recover the upstream session id from a client-facing token.
    pub fn decode(&self, token: &str) -> Result<String, TokenCodecError> {
        self.transform(token, Direction::Backward)
    }

    fn transform(&self, input: &str, direction: Direction) -> Result<String, TokenCodecError> {
        if !is_alphanumeric(input) {
            return Err(TokenCodecError::InvalidInput);
        }
        let shifts = self.key.bytes().cycle().map(shift_of);
        let out = input
            .bytes()
            .zip(shifts)
            .map(|(byte, shift)| {
                let shift = match direction {
                    Direction::Forward => shift,
                    Direction::Backward => -shift,
                };
                shift_byte(byte, shift) as char
            })
            .collect();
        Ok(out)
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

/// Failures from [`TokenCipher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenCodecError {
    /// The key is empty or not alphanumeric.
    #[error("cipher key must be non-empty and alphanumeric")]
    InvalidKey,
    /// The input contains characters outside the cipher alphabet.
    #[error("token must contain only letters and digits")]
    InvalidInput,
}

fn is_alphanumeric(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn shift_of(key_byte: u8) -> i8 {
    match key_byte {
        b'a'..=b'z' => (key_byte - b'a') as i8,
        b'A'..=b'Z' => (key_byte - b'A') as i8,
        b'0'..=b'9' => (key_byte - b'0') as i8,
        _ => 0,
    }
}

fn shift_byte(byte: u8, shift: i8) -> u8 {
    let rotate = |base: u8, span: i16| {
        let offset = (i16::from(byte - base) + i16::from(shift)).rem_euclid(span);
        base + offset as u8
    };
    match byte {
        b'a'..=b'z' => rotate(b'a', 26),
        b'A'..=b'Z' => rotate(b'A', 26),
        b'0'..=b'9' => rotate(b'0', 10),
        _ => byte,
    }
}

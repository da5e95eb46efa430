//! Secret Key Generation
//!
//! Produces the random signing key written into the env file. Kept behind
//! a one-method trait so the wizard can be exercised with a fixed fake.

use rand::Rng;

/// Characters a generated secret key may contain: lowercase letters,
/// digits, and punctuation safe inside an unquoted env value.
const SECRET_KEY_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*(-_=+)";

/// Length of a generated secret key.
const SECRET_KEY_LENGTH: usize = 50;

/// A source of fresh random secret keys.
pub trait SecretSource {
    /// Return a new random key. Never deterministic across calls.
    fn generate(&self) -> String;
}

/// Production key source backed by the thread-local CSPRNG.
pub struct RandomSecret;

impl SecretSource for RandomSecret {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..SECRET_KEY_LENGTH)
            .map(|_| SECRET_KEY_CHARS[rng.gen_range(0..SECRET_KEY_CHARS.len())] as char)
            .collect()
    }
}

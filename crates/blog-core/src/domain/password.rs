use std::fmt;

use subtle::ConstantTimeEq;

/// The shared secret that guards every write.
#[derive(Clone)]
pub struct PostPassword(String);

impl PostPassword {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Exact, case-sensitive comparison in constant time.
    pub fn matches(&self, candidate: &str) -> bool {
        candidate.as_bytes().ct_eq(self.0.as_bytes()).into()
    }
}

impl fmt::Debug for PostPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PostPassword(***)")
    }
}

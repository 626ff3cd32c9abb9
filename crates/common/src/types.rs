use std::fmt;
use uuid::{Builder, Uuid};

/// Unique identifier for an enemy or projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Build a v4-formatted id from caller-supplied random bytes.
    ///
    /// Seeded worlds mint ids this way so that two runs with the same seed
    /// produce the same ids.
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(Builder::from_random_bytes(bytes).into_uuid())
    }

    /// First eight hex digits, for logs and debug output.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_uniqueness() {
        let a = EntityId::new();
        let b = EntityId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn same_bytes_same_id() {
        let a = EntityId::from_random_bytes([7; 16]);
        let b = EntityId::from_random_bytes([7; 16]);
        assert_eq!(a, b);
        assert_eq!(a.0.get_version_num(), 4);
    }

    #[test]
    fn short_form_is_eight_hex_digits() {
        let id = EntityId::from_random_bytes([0xab; 16]);
        assert_eq!(id.short(), "abababab");
        assert_eq!(id.to_string(), id.short());
    }
}

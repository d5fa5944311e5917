use uuid::Uuid;

/// Source of note identifiers. Implementations must never return the same id twice.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Time-ordered UUIDv7 ids, so notes sort by creation within a user's partition
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn generate(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

use crate::deliveries::form::DeliveryForm;
use uuid::Uuid;

pub trait SessionRepo {
    async fn create(&self) -> Uuid;

    async fn remove(&self, session_id: Uuid) -> bool;

    async fn count(&self) -> usize;

    /// Drops sessions nobody has touched for longer than the idle timeout.
    /// Returns how many were dropped.
    async fn evict_idle(&self) -> usize;
}

/// Access to the form of one session. `None` means there is no such session.
/// Both reads and updates count as activity for idle eviction.
pub trait DeliveryFormRepo {
    async fn read<R>(&self, session_id: Uuid, f: impl FnOnce(&DeliveryForm) -> R) -> Option<R>;

    async fn update<R>(
        &self,
        session_id: Uuid,
        f: impl FnOnce(&mut DeliveryForm) -> R,
    ) -> Option<R>;
}

//! Domain event and publisher traits.

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Send + Sync + Clone {
    /// Returns the event type name.
    fn event_type(&self) -> &'static str;

    /// Returns when the event was created.
    fn created_at(&self) -> DateTime<Utc>;

    /// Hands this event to a publisher.
    fn fire(&self, publisher: &dyn DomainEventPublisher<Self>)
    where
        Self: Sized,
    {
        publisher.publish(self);
    }
}

/// Sink for one kind of domain event.
///
/// Publishing is fire-and-forget: delivery, persistence and retries belong to
/// the implementation, and the caller never waits for confirmation.
pub trait DomainEventPublisher<E: DomainEvent>: Send + Sync {
    fn publish(&self, event: &E);
}

/// Publisher that discards every event.
///
/// Useful when the caller dispatches the returned event itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPublisher;

impl<E: DomainEvent> DomainEventPublisher<E> for NoopPublisher {
    fn publish(&self, _event: &E) {}
}

impl<E: DomainEvent, P: DomainEventPublisher<E>> DomainEventPublisher<E> for std::sync::Arc<P> {
    fn publish(&self, event: &E) {
        (**self).publish(event);
    }
}

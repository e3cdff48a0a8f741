pub mod cart;
pub mod delivery;
pub mod notify;

pub use cart::{Cart, CartLineItem, InMemoryCart};
pub use delivery::{DeliveryField, DeliveryInfo, InvalidDeliveryInfo};
pub use notify::{NoopNotifier, Notifier, NotifyError, RecordingNotifier};

/// Failures coming out of the cart/database collaborator. These are handed
/// back to the caller untouched; nothing in this workspace retries them.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend failure: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("media {media_id} not available: requested {requested}, in stock {in_stock}")]
    Unavailable {
        media_id: i64,
        requested: u32,
        in_stock: u32,
    },

    #[error("unknown media {0}")]
    UnknownMedia(i64),
}

impl StorageError {
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

/// Everything the rush-order flow can surface to its caller.
#[derive(Debug, thiserror::Error)]
pub enum PlaceOrderError {
    #[error(transparent)]
    InvalidDeliveryInfo(#[from] InvalidDeliveryInfo),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

pub type PlaceOrderResult<T> = Result<T, PlaceOrderError>;

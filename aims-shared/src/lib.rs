pub mod models;
pub mod pii;

pub use models::media::Media;
pub use pii::Masked;

//! Core data types for the alert pipeline.

mod article;
mod daily;
mod movement;
mod notification;

pub use article::Article;
pub use daily::{DailyRecord, DailySeries};
pub use movement::{Direction, MovementResult};
pub use notification::{DeliveryReceipt, NotificationMessage};

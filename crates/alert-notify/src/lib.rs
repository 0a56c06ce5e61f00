//! Notification senders.

mod console;
mod twilio;

pub use console::ConsoleSender;
pub use twilio::{TwilioConfig, TwilioSender};

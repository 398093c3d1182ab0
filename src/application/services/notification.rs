//! # Notification Rendering
//!
//! Pure notification composition over pluggable channels.
//!
//! The service depends on the [`MessageChannel`] abstraction rather
//! than any concrete channel, and rendering returns strings instead of
//! writing to stdout or a transport. Actual delivery is an external
//! collaborator's concern.

use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use tracing::debug;

/// Trait for message channels.
///
/// Implementations render a message for their medium. Rendering is a
/// pure function of the input; no I/O happens here.
pub trait MessageChannel: Send + Sync + fmt::Debug {
    /// Renders the delivery line for the given message.
    fn deliver(&self, message: &str) -> String;

    /// Returns the name of this channel.
    fn channel_name(&self) -> &'static str;
}

/// Email message channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailChannel;

impl MessageChannel for EmailChannel {
    fn deliver(&self, message: &str) -> String {
        format!("Email sent: {message}")
    }

    fn channel_name(&self) -> &'static str {
        "Email"
    }
}

/// SMS message channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmsChannel;

impl MessageChannel for SmsChannel {
    fn deliver(&self, message: &str) -> String {
        format!("SMS sent: {message}")
    }

    fn channel_name(&self) -> &'static str {
        "SMS"
    }
}

/// Notifies users through an injected channel.
///
/// # Examples
///
/// ```
/// use freight_quote::{EmailChannel, NotificationService};
///
/// let service = NotificationService::new(Box::new(EmailChannel));
/// let line = service.notify("Welcome aboard!").unwrap();
/// assert_eq!(line, "Email sent: Welcome aboard!");
/// ```
#[derive(Debug)]
pub struct NotificationService {
    channel: Box<dyn MessageChannel>,
}

impl NotificationService {
    /// Creates a new notification service over the given channel.
    #[must_use]
    pub fn new(channel: Box<dyn MessageChannel>) -> Self {
        Self { channel }
    }

    /// Renders a notification for the user.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] if the message is empty or
    /// whitespace-only.
    pub fn notify(&self, message: &str) -> DomainResult<String> {
        if message.trim().is_empty() {
            return Err(DomainError::invalid_input("message must not be empty"));
        }
        debug!(channel = self.channel.channel_name(), "rendering notification");
        Ok(self.channel.deliver(message))
    }

    /// Returns the name of the underlying channel.
    #[must_use]
    pub fn channel_name(&self) -> &'static str {
        self.channel.channel_name()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn email_channel_renders() {
        let service = NotificationService::new(Box::new(EmailChannel));
        assert_eq!(
            service.notify("Order shipped").unwrap(),
            "Email sent: Order shipped"
        );
        assert_eq!(service.channel_name(), "Email");
    }

    #[test]
    fn sms_channel_renders() {
        let service = NotificationService::new(Box::new(SmsChannel));
        assert_eq!(
            service.notify("Out for delivery").unwrap(),
            "SMS sent: Out for delivery"
        );
        assert_eq!(service.channel_name(), "SMS");
    }

    #[test]
    fn empty_message_rejected() {
        let service = NotificationService::new(Box::new(EmailChannel));
        assert!(matches!(
            service.notify("   "),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn rendering_is_pure() {
        let service = NotificationService::new(Box::new(SmsChannel));
        let a = service.notify("same").unwrap();
        let b = service.notify("same").unwrap();
        assert_eq!(a, b);
    }
}

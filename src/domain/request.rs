use crate::domain::value::{MessageText, RawPhoneNumber, TemplateKey};

/// Delivery route requested for a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    /// Regular route; no `priority` field is sent.
    #[default]
    Normal,
    /// Higher-cost priority route (`"priority": "high"`).
    High,
}

impl Priority {
    pub fn is_high(self) -> bool {
        self == Self::High
    }
}

impl From<bool> for Priority {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Normal }
    }
}

/// A single SMS dispatch request.
///
/// Only the recipient is required. The API expects a message, a template, or both, but
/// that rule is enforced server-side and reported as an API error.
#[derive(Debug, Clone)]
pub struct Dispatch {
    phone: RawPhoneNumber,
    message: Option<MessageText>,
    template: Option<TemplateKey>,
    priority: Priority,
}

impl Dispatch {
    pub fn new(phone: impl Into<RawPhoneNumber>) -> Self {
        Self {
            phone: phone.into(),
            message: None,
            template: None,
            priority: Priority::Normal,
        }
    }

    /// Shortcut for a free-text message to one recipient.
    pub fn text(phone: impl Into<RawPhoneNumber>, message: MessageText) -> Self {
        Self::new(phone).message(message)
    }

    /// Shortcut for a templated message to one recipient.
    pub fn template_only(phone: impl Into<RawPhoneNumber>, template: TemplateKey) -> Self {
        Self::new(phone).template(template)
    }

    pub fn message(mut self, message: MessageText) -> Self {
        self.message = Some(message);
        self
    }

    pub fn template(mut self, template: TemplateKey) -> Self {
        self.template = Some(template);
        self
    }

    pub fn priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn phone(&self) -> &RawPhoneNumber {
        &self.phone
    }

    pub fn message_text(&self) -> Option<&MessageText> {
        self.message.as_ref()
    }

    pub fn template_key(&self) -> Option<&TemplateKey> {
        self.template.as_ref()
    }

    pub fn priority_route(&self) -> Priority {
        self.priority
    }
}

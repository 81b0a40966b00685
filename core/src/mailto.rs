use crate::fields::FormFields;

/// Unencoded parts of a prefilled `mailto:` link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoLink {
    pub fn for_fields(recipient: &str, fields: &FormFields) -> Self {
        Self {
            recipient: recipient.to_string(),
            subject: fields.subject.clone(),
            body: format!(
                "Name: {}\nEmail: {}\n\n{}",
                fields.name, fields.email, fields.message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_sender_before_message() {
        let link = MailtoLink::for_fields("to@x.io", &FormFields::new("A", "a@b.co", "S", "M"));
        assert_eq!(link.recipient, "to@x.io");
        assert_eq!(link.subject, "S");
        assert_eq!(link.body, "Name: A\nEmail: a@b.co\n\nM");
    }
}

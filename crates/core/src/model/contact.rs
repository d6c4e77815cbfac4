use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContactError {
    #[error("name is required")]
    MissingName,

    #[error("email is required")]
    MissingEmail,

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("message is required")]
    MissingMessage,
}

/// Raw contact form state, as bound to the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// A contact request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    name: String,
    email: String,
    phone: Option<String>,
    message: String,
}

impl ContactForm {
    /// Validate required fields.
    ///
    /// # Errors
    ///
    /// Returns the first `ContactError` found, checking name, email, then message.
    pub fn validate(&self) -> Result<ContactRequest, ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail);
        }

        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactError::MissingMessage);
        }

        let phone = Some(self.phone.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_owned);

        Ok(ContactRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            phone,
            message: message.to_owned(),
        })
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl ContactRequest {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn looks_like_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: String::new(),
            message: "I want to design cars.".into(),
        }
    }

    #[test]
    fn valid_form_without_phone() {
        let request = form().validate().unwrap();
        assert_eq!(request.name(), "John Doe");
        assert_eq!(request.phone(), None);
    }

    #[test]
    fn phone_is_trimmed_and_kept() {
        let mut f = form();
        f.phone = " +1 (555) 000-0000 ".into();
        assert_eq!(f.validate().unwrap().phone(), Some("+1 (555) 000-0000"));
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        let mut f = form();
        f.name = "  ".into();
        f.message = String::new();
        assert_eq!(f.validate(), Err(ContactError::MissingName));

        let mut f = form();
        f.email = String::new();
        assert_eq!(f.validate(), Err(ContactError::MissingEmail));

        let mut f = form();
        f.message = "\n".into();
        assert_eq!(f.validate(), Err(ContactError::MissingMessage));
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["john", "@example.com", "john@", "a@b@c", "jo hn@example.com"] {
            let mut f = form();
            f.email = bad.into();
            assert_eq!(f.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut f = form();
        f.clear();
        assert_eq!(f, ContactForm::default());
    }
}

//! Contact details extraction

use crate::error::Result;
use crate::models::ContactInfo;
use regex::Regex;

pub struct ContactExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    linkedin_regex: Regex,
    github_regex: Regex,
}

impl ContactExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            email_regex: Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9_-]+")?,
            phone_regex: Regex::new(
                r"(?:\+?[0-9]{1,3}[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}",
            )?,
            linkedin_regex: Regex::new(r"(?i)linkedin\.com/in/[\w-]+")?,
            github_regex: Regex::new(r"(?i)github\.com/[\w-]+")?,
        })
    }

    /// First match per field; fields are independent
    pub fn extract(&self, text: &str) -> ContactInfo {
        let first = |re: &Regex| re.find(text).map(|m| m.as_str().to_string());

        ContactInfo {
            email: first(&self.email_regex),
            phone: first(&self.phone_regex),
            linkedin: first(&self.linkedin_regex),
            github: first(&self.github_regex),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_all_fields() {
        let text = "Jane Roe\njane.roe@mail.example.com | +1 555-123-4567\n\
                    https://www.linkedin.com/in/jane-roe\nhttps://github.com/janeroe";
        let contact = ContactExtractor::new().unwrap().extract(text);

        assert_eq!(contact.email.as_deref(), Some("jane.roe@mail.example.com"));
        assert_eq!(contact.phone.as_deref(), Some("+1 555-123-4567"));
        assert_eq!(contact.linkedin.as_deref(), Some("linkedin.com/in/jane-roe"));
        assert_eq!(contact.github.as_deref(), Some("github.com/janeroe"));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let contact = ContactExtractor::new().unwrap().extract("Worked 2019-2022 in Paris");
        assert_eq!(contact, ContactInfo::default());
    }

    #[test]
    fn test_phone_needs_ascii_digits() {
        let text = "Call \u{0665}\u{0665}\u{0665} \
                    \u{0661}\u{0662}\u{0663} \u{0664}\u{0665}\u{0666}\u{0667}";
        let contact = ContactExtractor::new().unwrap().extract(text);
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn test_first_match_wins() {
        let contact = ContactExtractor::new()
            .unwrap()
            .extract("a@one.io then b@two.io, (555) 987 6543");
        assert_eq!(contact.email.as_deref(), Some("a@one.io"));
        assert_eq!(contact.phone.as_deref(), Some("(555) 987 6543"));
    }
}

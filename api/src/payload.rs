use reqwest::multipart::{Form, Part};

use crate::ClientError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadPart {
    Text(String),
    File {
        file_name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

/// Ordered multipart key/value bundle. Built fresh for every submission and
/// consumed by [`crate::ValidationClient::submit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    parts: Vec<(String, PayloadPart)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parts
            .push((name.to_string(), PayloadPart::Text(value.into())));
        self
    }

    pub fn file(
        mut self,
        name: &str,
        file_name: impl Into<String>,
        mime: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push((
            name.to_string(),
            PayloadPart::File {
                file_name: file_name.into(),
                mime: mime.into(),
                bytes,
            },
        ));
        self
    }

    pub fn get(&self, name: &str) -> Option<&PayloadPart> {
        self.parts
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, part)| part)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn text_value(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            PayloadPart::Text(value) => Some(value.as_str()),
            PayloadPart::File { .. } => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|(key, _)| key.as_str())
    }

    pub fn into_multipart(self) -> Result<Form, ClientError> {
        let mut form = Form::new();
        for (name, part) in self.parts {
            form = match part {
                PayloadPart::Text(value) => form.text(name, value),
                PayloadPart::File {
                    file_name,
                    mime,
                    bytes,
                } => {
                    let part = Part::bytes(bytes)
                        .file_name(file_name.clone())
                        .mime_str(&mime)
                        .map_err(|err| ClientError::InvalidPayload(format!("{file_name}: {err}")))?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let payload = FormPayload::new()
            .text("n_samples", "100")
            .text("evidence_type", "t-test");
        assert_eq!(
            payload.keys().collect::<Vec<_>>(),
            vec!["n_samples", "evidence_type"]
        );
        assert_eq!(payload.text_value("n_samples"), Some("100"));
    }

    #[test]
    fn file_parts_are_not_text() {
        let payload = FormPayload::new().file("file", "a.csv", "text/csv", b"x,y\n".to_vec());
        assert!(payload.contains("file"));
        assert_eq!(payload.text_value("file"), None);
        assert!(payload.into_multipart().is_ok());
    }

    #[test]
    fn unparseable_mime_is_an_invalid_payload() {
        let payload = FormPayload::new().file("file", "a.csv", "not a mime", b"x".to_vec());
        assert!(matches!(
            payload.into_multipart(),
            Err(ClientError::InvalidPayload(message)) if message.starts_with("a.csv")
        ));
    }
}

/// Name of the person submitting the contact form
#[derive(Debug)]
pub struct ContactName(String);

impl ContactName {
    /// Parse contact name
    pub fn parse(name: String) -> Result<Self, String> {
        if name.trim().is_empty() {
            Err("The contact name is missing".to_string())
        } else {
            Ok(Self(name.trim().to_string()))
        }
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

use serde::{de, Deserialize};
use std::convert::AsRef;
use std::fmt;
use std::str::FromStr;

pub static CENSOR_STRING: &str = "***REMOVED***";

/// A configuration secret (API key, SMTP password) that never prints itself.
#[derive(Clone)]
pub struct CensoredString {
    data: String,
    pub representation: String,
}

impl CensoredString {
    /// Take ownership of a secret value
    pub fn new<T: AsRef<str> + ?Sized>(secret: &T, representation: Option<&T>) -> Self {
        Self {
            data: secret.as_ref().to_owned(),
            representation: representation
                .map(|value| value.as_ref().to_owned())
                .unwrap_or_else(|| CENSOR_STRING.to_owned()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.trim().is_empty()
    }
}

impl AsRef<str> for CensoredString {
    fn as_ref(&self) -> &str {
        &self.data
    }
}

impl FromStr for CensoredString {
    type Err = core::convert::Infallible;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(src))
    }
}

impl From<String> for CensoredString {
    fn from(src: String) -> Self {
        Self {
            data: src,
            representation: CENSOR_STRING.to_owned(),
        }
    }
}

impl From<&str> for CensoredString {
    fn from(src: &str) -> Self {
        Self::from(src.to_owned())
    }
}

impl<'de> Deserialize<'de> for CensoredString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(CensoredString::from)
    }
}

impl fmt::Debug for CensoredString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.representation, f)
    }
}

impl fmt::Display for CensoredString {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.representation, f)
    }
}

#[cfg(test)]
mod tests {
    use super::{CensoredString, CENSOR_STRING};

    #[test]
    fn debug_and_display_hide_the_secret() {
        let secret = CensoredString::from("re_live_0123456789");
        assert_eq!(format!("{}", secret), CENSOR_STRING);
        assert_eq!(format!("{:?}", secret), format!("{:?}", CENSOR_STRING));
        assert_eq!(secret.as_ref(), "re_live_0123456789");
    }

    #[test]
    fn custom_representation_is_printed() {
        let secret = CensoredString::new("hunter2", Some("smtp-password"));
        assert_eq!(secret.to_string(), "smtp-password");
    }

    #[test]
    fn whitespace_secret_counts_as_empty() {
        assert!(CensoredString::from("  ").is_empty());
        assert!(!CensoredString::from("key").is_empty());
    }
}

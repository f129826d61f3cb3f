use async_trait::async_trait;
use std::fmt::{self, Debug};
use std::time::Duration;

use crate::errors::DriverError;

/// How to find an element on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// CSS selector, e.g. `#source`
    Css(String),
    /// XPath expression
    XPath(String),
}

impl Locator {
    /// Parse a selector string. An `xpath:` prefix selects XPath, anything
    /// else is a CSS selector.
    pub fn parse(selector: &str) -> Self {
        match selector.strip_prefix("xpath:") {
            Some(xpath) => Self::XPath(xpath.trim().to_string()),
            None => Self::Css(selector.trim().to_string()),
        }
    }

    /// W3C locator strategy name
    pub fn strategy(&self) -> &'static str {
        match self {
            Self::Css(_) => "css selector",
            Self::XPath(_) => "xpath",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Css(value) | Self::XPath(value) => value,
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.strategy(), self.value())
    }
}

/// Opaque handle to an element found by the driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRef(pub String);

/// Browser driver operations needed by a translator session
///
/// Every call blocks the caller until the driver answers. Element lookups
/// poll for up to the implicit wait before reporting
/// [`DriverError::NoSuchElement`].
#[async_trait]
pub trait WebDriver: Send + Sync + Debug {
    /// Set how long element lookups keep polling
    async fn set_implicit_wait(&self, timeout: Duration) -> Result<(), DriverError>;

    /// Full page navigation; returns once the page has loaded
    async fn navigate(&self, url: &str) -> Result<(), DriverError>;

    /// Find a single element
    async fn find_element(&self, locator: &Locator) -> Result<ElementRef, DriverError>;

    /// Type `text` into an element as keystrokes
    async fn send_keys(&self, element: &ElementRef, text: &str) -> Result<(), DriverError>;

    /// Rendered text of an element
    async fn element_text(&self, element: &ElementRef) -> Result<String, DriverError>;

    /// End the browser session
    async fn quit(&self) -> Result<(), DriverError>;
}

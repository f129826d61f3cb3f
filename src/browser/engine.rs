use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Browser engines a translator session can drive
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BrowserEngine {
    // @engine: Chromium family
    #[default]
    Chrome,
    // @engine: Gecko family
    Firefox,
    // @engine: WebKit family
    Safari,
    // @engine: Chromium based alternative
    Edge,
}

impl BrowserEngine {
    /// Every supported engine
    pub fn all() -> [Self; 4] {
        [Self::Chrome, Self::Firefox, Self::Safari, Self::Edge]
    }

    /// Pick an engine by name, falling back to the default for unknown names.
    ///
    /// Matching ignores case and surrounding whitespace.
    pub fn from_name(name: &str) -> Self {
        match name.parse::<Self>() {
            Ok(engine) => engine,
            Err(_) => {
                let fallback = Self::default();
                warn!("Unknown browser engine '{}', falling back to {}", name, fallback.display_name());
                fallback
            }
        }
    }

    // @returns: Capitalized engine name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Chrome => "Chrome",
            Self::Firefox => "Firefox",
            Self::Safari => "Safari",
            Self::Edge => "Edge",
        }
    }

    // @returns: Lowercase engine identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Chrome => "chrome".to_string(),
            Self::Firefox => "firefox".to_string(),
            Self::Safari => "safari".to_string(),
            Self::Edge => "edge".to_string(),
        }
    }

    /// Name of the WebDriver binary for this engine
    pub fn default_driver_binary(&self) -> &'static str {
        match self {
            Self::Chrome => "chromedriver",
            Self::Firefox => "geckodriver",
            Self::Safari => "safaridriver",
            Self::Edge => "msedgedriver",
        }
    }

    /// Port the driver listens on unless configured otherwise
    pub fn default_driver_port(&self) -> u16 {
        match self {
            Self::Chrome => 9515,
            Self::Firefox => 4444,
            Self::Safari => 4445,
            Self::Edge => 9516,
        }
    }

    /// Command line arguments that make the driver listen on `port`
    pub fn port_args(&self, port: u16) -> Vec<String> {
        match self {
            Self::Chrome | Self::Edge => vec![format!("--port={}", port)],
            Self::Firefox | Self::Safari => vec!["--port".to_string(), port.to_string()],
        }
    }

    /// W3C new-session payload for this engine
    pub fn capabilities(&self, headless: bool) -> Value {
        let always_match = match self {
            Self::Chrome => json!({
                "browserName": "chrome",
                "goog:chromeOptions": { "args": chromium_args(headless) },
            }),
            Self::Edge => json!({
                "browserName": "MicrosoftEdge",
                "ms:edgeOptions": { "args": chromium_args(headless) },
            }),
            Self::Firefox => {
                let args: Vec<&str> = if headless { vec!["-headless"] } else { Vec::new() };
                json!({
                    "browserName": "firefox",
                    "moz:firefoxOptions": { "args": args },
                })
            }
            Self::Safari => {
                if headless {
                    warn!("Safari has no headless mode, the browser window will be visible");
                }
                json!({ "browserName": "safari" })
            }
        };

        json!({ "capabilities": { "alwaysMatch": always_match } })
    }
}

fn chromium_args(headless: bool) -> Vec<&'static str> {
    let mut args = vec!["--disable-gpu", "--no-sandbox"];
    if headless {
        args.insert(0, "--headless");
    }
    args
}

impl std::fmt::Display for BrowserEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for BrowserEngine {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "chrome" | "chromium" => Ok(Self::Chrome),
            "firefox" | "gecko" => Ok(Self::Firefox),
            "safari" | "webkit" => Ok(Self::Safari),
            "edge" | "msedge" => Ok(Self::Edge),
            _ => Err(anyhow::anyhow!("Invalid browser engine: {}", s)),
        }
    }
}

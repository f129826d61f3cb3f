use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, Method};
use serde_json::{Value, json};
use std::time::Duration;

use super::webdriver::{ElementRef, Locator, WebDriver};
use crate::errors::DriverError;

/// Key the W3C protocol uses for element references
const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Key used by drivers that still speak the legacy JSON wire protocol
const LEGACY_ELEMENT_KEY: &str = "ELEMENT";

/// W3C WebDriver client bound to one browser session
#[derive(Debug)]
pub struct WebDriverClient {
    /// Base URL of the driver, e.g. `http://localhost:9515`
    base_url: String,
    /// Session id assigned by the driver
    session_id: String,
    /// HTTP client for driver commands
    client: Client,
}

impl WebDriverClient {
    /// Open a new browser session on the driver at `base_url`.
    ///
    /// `command_timeout` bounds every single driver command, page loads
    /// included.
    pub async fn new_session(
        base_url: impl Into<String>,
        capabilities: Value,
        command_timeout: Duration,
    ) -> Result<Self, DriverError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(command_timeout)
            .build()
            .map_err(|e| DriverError::RequestFailed(format!("Failed to build HTTP client: {}", e)))?;

        let value = send_command(&client, Method::POST, &format!("{}/session", base_url), Some(capabilities))
            .await
            .map_err(|e| DriverError::LaunchFailed(format!("Failed to create browser session: {}", e)))?;

        let session_id = value
            .get("sessionId")
            .and_then(|v| v.as_str())
            .ok_or_else(|| DriverError::ParseError(format!("New session response has no sessionId: {}", value)))?
            .to_string();

        debug!("Opened WebDriver session {} on {}", session_id, base_url);

        Ok(Self {
            base_url,
            session_id,
            client,
        })
    }

    /// Session id assigned by the driver
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    fn session_url(&self, path: &str) -> String {
        format!("{}/session/{}{}", self.base_url, self.session_id, path)
    }

    async fn command(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, DriverError> {
        send_command(&self.client, method, &self.session_url(path), body).await
    }
}

#[async_trait]
impl WebDriver for WebDriverClient {
    async fn set_implicit_wait(&self, timeout: Duration) -> Result<(), DriverError> {
        let body = json!({ "implicit": timeout.as_millis() as u64 });
        self.command(Method::POST, "/timeouts", Some(body)).await?;
        Ok(())
    }

    async fn navigate(&self, url: &str) -> Result<(), DriverError> {
        self.command(Method::POST, "/url", Some(json!({ "url": url }))).await?;
        Ok(())
    }

    async fn find_element(&self, locator: &Locator) -> Result<ElementRef, DriverError> {
        let body = json!({ "using": locator.strategy(), "value": locator.value() });
        let value = self.command(Method::POST, "/element", Some(body)).await?;
        parse_element(&value)
    }

    async fn send_keys(&self, element: &ElementRef, text: &str) -> Result<(), DriverError> {
        let path = format!("/element/{}/value", element.0);
        self.command(Method::POST, &path, Some(json!({ "text": text }))).await?;
        Ok(())
    }

    async fn element_text(&self, element: &ElementRef) -> Result<String, DriverError> {
        let path = format!("/element/{}/text", element.0);
        let value = self.command(Method::GET, &path, None).await?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DriverError::ParseError(format!("Element text is not a string: {}", value)))
    }

    async fn quit(&self) -> Result<(), DriverError> {
        self.command(Method::DELETE, "", None).await?;
        debug!("Closed WebDriver session {}", self.session_id);
        Ok(())
    }
}

/// Send one command and unwrap the `value` member of the reply
async fn send_command(client: &Client, method: Method, url: &str, body: Option<Value>) -> Result<Value, DriverError> {
    debug!("WebDriver {} {}", method, url);

    let mut request = client.request(method, url);
    if let Some(body) = body {
        request = request.json(&body);
    }

    let response = request
        .send()
        .await
        .map_err(|e| DriverError::RequestFailed(format!("{}: {}", url, e)))?;

    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| DriverError::RequestFailed(format!("Failed to read driver response: {}", e)))?;

    parse_response(status, &text)
}

/// Decode a driver reply into its `value`, or the error it carries
pub(crate) fn parse_response(status: u16, body: &str) -> Result<Value, DriverError> {
    let payload: Value = serde_json::from_str(body).map_err(|e| {
        error!(
            "Unparseable driver response (status {}): {}",
            status,
            body.chars().take(200).collect::<String>()
        );
        DriverError::ParseError(e.to_string())
    })?;

    let value = payload.get("value").cloned().unwrap_or(Value::Null);

    if let Some(code) = value.get("error").and_then(|v| v.as_str()) {
        let message = value
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        return Err(match code {
            "no such element" => DriverError::NoSuchElement(message),
            _ => DriverError::WebDriver {
                error: code.to_string(),
                message,
            },
        });
    }

    if !(200..300).contains(&status) {
        return Err(DriverError::WebDriver {
            error: format!("http {}", status),
            message: body.chars().take(200).collect(),
        });
    }

    Ok(value)
}

fn parse_element(value: &Value) -> Result<ElementRef, DriverError> {
    value
        .get(ELEMENT_KEY)
        .or_else(|| value.get(LEGACY_ELEMENT_KEY))
        .and_then(|v| v.as_str())
        .map(|id| ElementRef(id.to_string()))
        .ok_or_else(|| DriverError::ParseError(format!("Response is not an element reference: {}", value)))
}

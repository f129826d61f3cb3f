/*!
 * Translator session: one browser, many translations.
 *
 * A session owns a single WebDriver session (and the driver process when it
 * spawned one). Creating it navigates to the default language pair; each
 * translation re-navigates to the requested pair, types the text into the
 * input element and reads the output element. Calls are strictly
 * sequential: `translate` takes `&mut self`.
 */

use log::{debug, info, warn};
use std::time::Duration;

use super::resolver::{DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE, LanguagePair};
use crate::app_config::{Config, ServiceConfig};
use crate::browser::{BrowserEngine, DriverProcess, Locator, WebDriver, WebDriverClient};
use crate::errors::{DriverError, TranslationError};

/// How long element lookups poll before giving up
pub const IMPLICIT_WAIT: Duration = Duration::from_secs(2);

/// Upper bound for ending the browser session from `Drop` outside a runtime
const DROP_QUIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Returned instead of a translation when the output never rendered
pub const NOT_READY_MESSAGE: &str = "Translation taking too long, aborted...";

/// Outcome of a single translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationResult {
    /// Text read from the output element
    Translated(String),
    /// The output element did not appear within the implicit wait
    NotReady,
}

impl TranslationResult {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Translated(_))
    }

    /// The translation, or [`NOT_READY_MESSAGE`]
    pub fn into_text(self) -> String {
        match self {
            Self::Translated(text) => text,
            Self::NotReady => NOT_READY_MESSAGE.to_string(),
        }
    }
}

/// A live browser session driving the translation page
#[derive(Debug)]
pub struct TranslatorSession {
    /// `None` only once teardown has started
    driver: Option<Box<dyn WebDriver>>,
    /// Spawned driver binary, if any
    process: Option<DriverProcess>,
    engine: BrowserEngine,
    service: ServiceConfig,
    input: Locator,
    output: Locator,
    current_url: String,
    pair: LanguagePair,
}

impl TranslatorSession {
    /// Start a session on the named engine with default settings.
    ///
    /// Unknown engine names fall back to Chrome.
    pub async fn create(engine_name: &str) -> Result<Self, DriverError> {
        let mut config = Config::default();
        config.browser.engine = engine_name.to_string();
        Self::create_with_config(&config).await
    }

    /// Start a session as described by `config`.
    ///
    /// Spawns the engine's driver unless `browser.webdriver_url` points at
    /// a running one. Launch failures are returned as
    /// [`DriverError::LaunchFailed`].
    pub async fn create_with_config(config: &Config) -> Result<Self, DriverError> {
        let engine = config.browser.resolved_engine();

        let process = match &config.browser.webdriver_url {
            Some(_) => None,
            None => {
                let driver = config.browser.driver_for(engine);
                Some(DriverProcess::launch(engine, &driver, config.browser.startup_timeout()).await?)
            }
        };

        let base_url = match (&config.browser.webdriver_url, &process) {
            (Some(url), _) => url.clone(),
            (None, Some(process)) => process.base_url().to_string(),
            (None, None) => return Err(DriverError::LaunchFailed("No WebDriver endpoint available".to_string())),
        };

        let client =
            WebDriverClient::new_session(base_url, engine.capabilities(true), config.browser.command_timeout())
                .await?;

        Self::connect(Box::new(client), process, engine, config.service.clone()).await
    }

    /// Wrap an already opened driver session.
    ///
    /// Sets the implicit wait and navigates to the default language pair.
    /// Call [`TranslatorSession::close`] when done. A session dropped
    /// without it is still quit, in the background inside a runtime or
    /// blocking for a few seconds outside one.
    pub async fn connect(
        driver: Box<dyn WebDriver>,
        process: Option<DriverProcess>,
        engine: BrowserEngine,
        service: ServiceConfig,
    ) -> Result<Self, DriverError> {
        let pair = LanguagePair::default();
        let url = service.pair_url(pair.source.as_str(), pair.target.as_str());

        // Build the session first so a failing setup step still tears it down
        let mut session = Self {
            driver: Some(driver),
            process,
            engine,
            input: service.input_locator(),
            output: service.output_locator(),
            service,
            current_url: String::new(),
            pair,
        };

        let driver = session.driver.as_deref().ok_or(DriverError::SessionClosed)?;
        driver.set_implicit_wait(IMPLICIT_WAIT).await?;
        driver.navigate(&url).await?;
        session.current_url = url;

        info!("{} translator session ready at {}", engine.display_name(), session.current_url);
        Ok(session)
    }

    pub fn engine(&self) -> BrowserEngine {
        self.engine
    }

    /// URL of the most recent navigation
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Language pair of the most recent navigation
    pub fn language_pair(&self) -> LanguagePair {
        self.pair
    }

    /// Translate with the default pair, detecting the source language
    pub async fn translate_default(&mut self, text: &str) -> Result<String, TranslationError> {
        self.translate(text, DEFAULT_TARGET_LANGUAGE, DEFAULT_SOURCE_LANGUAGE).await
    }

    /// Translate `text`, returning [`NOT_READY_MESSAGE`] if the output did
    /// not render in time.
    pub async fn translate(
        &mut self,
        text: &str,
        target_lang: &str,
        source_lang: &str,
    ) -> Result<String, TranslationError> {
        Ok(self.translate_detailed(text, target_lang, source_lang).await?.into_text())
    }

    /// Translate `text` and report whether the output rendered.
    ///
    /// Languages are resolved before anything touches the browser, so an
    /// unknown language never causes a navigation.
    pub async fn translate_detailed(
        &mut self,
        text: &str,
        target_lang: &str,
        source_lang: &str,
    ) -> Result<TranslationResult, TranslationError> {
        let pair = LanguagePair::for_request(target_lang, source_lang)?;
        let url = self.service.pair_url(pair.source.as_str(), pair.target.as_str());

        let driver = self.driver.as_deref().ok_or(DriverError::SessionClosed)?;

        debug!("Navigating to {}", url);
        driver.navigate(&url).await?;
        self.current_url = url;
        self.pair = pair;

        let input = driver.find_element(&self.input).await?;
        debug!("Typing {} chars into {}", text.chars().count(), self.input);
        driver.send_keys(&input, text).await?;

        match driver.find_element(&self.output).await {
            Ok(output) => Ok(TranslationResult::Translated(driver.element_text(&output).await?)),
            Err(DriverError::NoSuchElement(message)) => {
                warn!("Translation output {} not rendered within {:?}: {}", self.output, IMPLICIT_WAIT, message);
                Ok(TranslationResult::NotReady)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// End the browser session and stop the driver.
    ///
    /// Consumes the session. The driver is stopped even if ending the
    /// browser session fails; the first error is returned.
    pub async fn close(mut self) -> Result<(), DriverError> {
        let driver = self.driver.take().ok_or(DriverError::SessionClosed)?;
        let process = self.process.take();

        let quit_result = driver.quit().await;
        let shutdown_result = match process {
            Some(process) => process.shutdown().await,
            None => Ok(()),
        };

        info!("{} translator session closed", self.engine.display_name());
        quit_result.and(shutdown_result)
    }
}

impl Drop for TranslatorSession {
    fn drop(&mut self) {
        let Some(driver) = self.driver.take() else {
            return;
        };

        warn!("{} translator session dropped without close", self.engine.display_name());
        let process = self.process.take();

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = driver.quit().await {
                        debug!("Quit on drop failed: {}", e);
                    }
                    if let Some(process) = process {
                        let _ = process.shutdown().await;
                    }
                });
            }
            Err(_) => {
                quit_blocking(driver.as_ref());
                drop(process);
            }
        }
    }
}

/// End the browser session on a throwaway runtime, bounded by [`DROP_QUIT_TIMEOUT`]
fn quit_blocking(driver: &dyn WebDriver) {
    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            warn!("Browser session left open, no runtime to quit it: {}", e);
            return;
        }
    };

    match runtime.block_on(tokio::time::timeout(DROP_QUIT_TIMEOUT, driver.quit())) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!("Quit on drop failed: {}", e),
        Err(_) => warn!("Quit on drop timed out after {:?}", DROP_QUIT_TIMEOUT),
    }
}

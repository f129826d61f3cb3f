/*!
 * Integration tests for the translator session
 */

use std::time::Duration;

use honyaku::app_config::{Config, ServiceConfig};
use honyaku::browser::BrowserEngine;
use honyaku::errors::{DriverError, TranslationError};
use honyaku::translation::{LanguagePair, NOT_READY_MESSAGE, TranslationResult, TranslatorSession};

use crate::common::mock_driver::{DriverCall, MockWebDriver};
use crate::common::{self, mock_session, pair_url};

/// Test that connecting sets the implicit wait, then navigates to the default pair
#[tokio::test]
async fn test_connect_withMockDriver_shouldWaitThenNavigateToDefaultPair() {
    let (session, _driver, state) = mock_session("Hello world").await;

    let calls = state.lock().unwrap().calls.clone();
    assert_eq!(
        calls,
        vec![
            DriverCall::ImplicitWait(Duration::from_secs(2)),
            DriverCall::Navigate(pair_url("auto", "en")),
        ]
    );
    assert_eq!(session.current_url(), pair_url("auto", "en"));
    assert_eq!(session.language_pair(), LanguagePair::default());
    assert_eq!(session.engine(), BrowserEngine::Chrome);

    session.close().await.unwrap();
}

/// Test the default pair: navigate, type, read
#[tokio::test]
async fn test_translate_withDefaultLanguages_shouldNavigateTypeAndRead() {
    let (mut session, _driver, state) = mock_session("Hello world").await;

    let result = session.translate("こんにちは世界", "en", "auto").await.unwrap();
    assert_eq!(result, "Hello world");

    let calls = state.lock().unwrap().calls.clone();
    assert_eq!(
        &calls[2..],
        &[
            DriverCall::Navigate(pair_url("auto", "en")),
            DriverCall::FindElement("#source".to_string()),
            DriverCall::SendKeys("#source".to_string(), "こんにちは世界".to_string()),
            DriverCall::FindElement(".translation".to_string()),
            DriverCall::ElementText(".translation".to_string()),
        ]
    );

    session.close().await.unwrap();
}

/// Test that a language name is resolved and the source default resolves to itself
#[tokio::test]
async fn test_translate_withTargetName_shouldResolveBothLanguages() {
    let (mut session, _driver, state) = mock_session("Bonjour").await;

    session.translate("hello", "French", "auto").await.unwrap();

    assert_eq!(session.current_url(), pair_url("auto", "fr"));
    assert_eq!(state.lock().unwrap().navigations().last().unwrap(), &pair_url("auto", "fr"));

    session.close().await.unwrap();
}

/// Test that an invalid target fails before any navigation
#[tokio::test]
async fn test_translate_withInvalidTarget_shouldFailWithoutNavigation() {
    let (mut session, _driver, state) = mock_session("unused").await;
    let calls_before = state.lock().unwrap().calls.len();

    let err = session.translate("hello", "klingon", "auto").await.unwrap_err();

    match err {
        TranslationError::InvalidLanguage(e) => assert_eq!(e.input(), "klingon"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(state.lock().unwrap().calls.len(), calls_before);
    assert_eq!(session.current_url(), pair_url("auto", "en"));

    session.close().await.unwrap();
}

/// Test that the error keeps the caller's casing
#[tokio::test]
async fn test_translate_withInvalidSource_shouldCarryOriginalInput() {
    let (mut session, _driver, _state) = mock_session("unused").await;

    let err = session.translate("hello", "en", "Quenya").await.unwrap_err();
    assert_eq!(err.to_string(), "Language \"Quenya\" not valid");

    session.close().await.unwrap();
}

/// Test the soft failure when the output never renders
#[tokio::test]
async fn test_translate_withMissingOutput_shouldReturnSentinel() {
    let (mut session, driver, _state) = mock_session("never read").await;
    driver.hide_element(".translation");

    let result = session.translate("hello", "de", "en").await.unwrap();
    assert_eq!(result, NOT_READY_MESSAGE);
    assert_eq!(result, "Translation taking too long, aborted...");

    let detailed = session.translate_detailed("hello", "de", "en").await.unwrap();
    assert_eq!(detailed, TranslationResult::NotReady);
    assert!(!detailed.is_ready());

    driver.show_element(".translation");
    let detailed = session.translate_detailed("hello", "de", "en").await.unwrap();
    assert_eq!(detailed, TranslationResult::Translated("never read".to_string()));

    session.close().await.unwrap();
}

/// Test that a missing input element is a hard error
#[tokio::test]
async fn test_translate_withMissingInput_shouldPropagateDriverError() {
    let (mut session, driver, state) = mock_session("unused").await;
    driver.hide_element("#source");

    let err = session.translate("hello", "en", "auto").await.unwrap_err();
    assert!(matches!(err, TranslationError::Driver(DriverError::NoSuchElement(_))));

    // Navigation still happened and is reflected in the session
    assert_eq!(state.lock().unwrap().navigations().len(), 2);

    session.close().await.unwrap();
}

/// Test that driver errors other than a missing element are not swallowed
#[tokio::test]
async fn test_translate_withNavigationFailure_shouldPropagate() {
    let (mut session, driver, _state) = mock_session("unused").await;
    driver.fail_next_navigation("invalid session id");

    let err = session.translate("hello", "ja", "en").await.unwrap_err();
    assert!(matches!(
        err,
        TranslationError::Driver(DriverError::WebDriver { ref error, .. }) if error == "invalid session id"
    ));
    // The failed navigation does not move the session
    assert_eq!(session.current_url(), pair_url("auto", "en"));

    session.close().await.unwrap();
}

/// Test that consecutive calls each navigate to their own pair
#[tokio::test]
async fn test_translate_withSequentialPairs_shouldNavigateFreshEachTime() {
    let (mut session, _driver, state) = mock_session("ok").await;

    session.translate("one", "french", "english").await.unwrap();
    assert_eq!(session.current_url(), pair_url("en", "fr"));

    session.translate("two", "ja", "auto").await.unwrap();
    assert_eq!(session.current_url(), pair_url("auto", "ja"));

    session.translate_default("three").await.unwrap();
    assert_eq!(session.current_url(), pair_url("auto", "en"));
    assert_eq!(session.language_pair(), LanguagePair::default());

    let navigations = state.lock().unwrap().navigations();
    assert_eq!(
        navigations,
        vec![
            pair_url("auto", "en"),
            pair_url("en", "fr"),
            pair_url("auto", "ja"),
            pair_url("auto", "en"),
        ]
    );

    session.close().await.unwrap();
}

/// Test that empty input is typed as-is
#[tokio::test]
async fn test_translate_withEmptyText_shouldPassThrough() {
    let (mut session, _driver, state) = mock_session("").await;

    let result = session.translate("", "en", "auto").await.unwrap();
    assert_eq!(result, "");
    assert!(
        state
            .lock()
            .unwrap()
            .calls
            .contains(&DriverCall::SendKeys("#source".to_string(), String::new()))
    );

    session.close().await.unwrap();
}

/// Test that close quits the driver exactly once
#[tokio::test]
async fn test_close_shouldQuitDriverOnce() {
    let (session, _driver, state) = mock_session("ok").await;

    session.close().await.unwrap();

    let state = state.lock().unwrap();
    assert_eq!(state.quit_count(), 1);
    assert_eq!(state.calls.last(), Some(&DriverCall::Quit));
}

/// Test that dropping an unclosed session still quits the driver
#[tokio::test]
async fn test_drop_withoutClose_shouldQuitInBackground() {
    let (session, _driver, state) = mock_session("ok").await;

    drop(session);
    // Let the spawned teardown run
    tokio::task::yield_now().await;
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert_eq!(state.lock().unwrap().quit_count(), 1);
}

/// Test custom selectors from configuration
#[tokio::test]
async fn test_connect_withCustomSelectors_shouldUseThem() {
    let driver = MockWebDriver::new("Hallo");
    let state = driver.state();
    let service = ServiceConfig {
        input_selector: "textarea[aria-label='Source text']".to_string(),
        output_selector: "xpath://span[@class='result']".to_string(),
        ..common::test_service_config()
    };

    let mut session = TranslatorSession::connect(Box::new(driver), None, BrowserEngine::Firefox, service)
        .await
        .unwrap();
    session.translate("hello", "de", "auto").await.unwrap();

    let calls = state.lock().unwrap().calls.clone();
    assert!(calls.contains(&DriverCall::FindElement("textarea[aria-label='Source text']".to_string())));
    assert!(calls.contains(&DriverCall::FindElement("//span[@class='result']".to_string())));

    session.close().await.unwrap();
}

/// Test that a missing driver binary surfaces as a launch failure
#[tokio::test]
async fn test_createWithConfig_withMissingDriverBinary_shouldFailToLaunch() {
    let mut config = Config::default();
    config.browser.engine = "no-such-browser".to_string();
    for driver in &mut config.browser.drivers {
        driver.binary = format!("/nonexistent/honyaku-{}-driver", driver.engine.to_lowercase_string());
    }

    let err = TranslatorSession::create_with_config(&config).await.unwrap_err();
    match err {
        // The unknown engine fell back to Chrome, so chromedriver's entry was launched
        DriverError::LaunchFailed(message) => assert!(message.contains("honyaku-chrome-driver"), "{}", message),
        other => panic!("Expected LaunchFailed, got {:?}", other),
    }
}

/// Test that dropping outside a runtime still ends the browser session
#[test]
fn test_drop_outsideRuntime_shouldQuitBlocking() {
    let (session, _driver, state) = tokio_test::block_on(mock_session("ok"));

    drop(session);

    assert_eq!(state.lock().unwrap().quit_count(), 1);
}

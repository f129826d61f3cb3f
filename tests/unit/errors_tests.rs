/*!
 * Tests for error types and conversions
 */

use honyaku::errors::{DriverError, InvalidLanguageError, TranslationError};

#[test]
fn test_invalidLanguageError_shouldNameInput() {
    let error = InvalidLanguageError("Klingon".to_string());
    assert_eq!(error.to_string(), "Language \"Klingon\" not valid");
    assert_eq!(error.input(), "Klingon");
}

#[test]
fn test_driverError_launchFailed_shouldDisplayCorrectly() {
    let error = DriverError::LaunchFailed("chromedriver not found".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Failed to launch browser driver"));
    assert!(display.contains("chromedriver not found"));
}

#[test]
fn test_driverError_webDriver_shouldDisplayCodeAndMessage() {
    let error = DriverError::WebDriver {
        error: "invalid session id".to_string(),
        message: "session deleted".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("invalid session id"));
    assert!(display.contains("session deleted"));
}

#[test]
fn test_translationError_fromInvalidLanguage_shouldBeTransparent() {
    let error: TranslationError = InvalidLanguageError("xx".to_string()).into();
    assert!(matches!(error, TranslationError::InvalidLanguage(_)));
    assert_eq!(error.to_string(), "Language \"xx\" not valid");
}

#[test]
fn test_translationError_fromDriverError_shouldWrapCorrectly() {
    let error: TranslationError = DriverError::SessionClosed.into();
    assert!(matches!(error, TranslationError::Driver(DriverError::SessionClosed)));
    assert!(error.to_string().contains("Browser session is closed"));
}

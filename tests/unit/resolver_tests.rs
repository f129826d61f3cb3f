/*!
 * Tests for language resolution
 */

use honyaku::translation::resolver::{DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE};
use honyaku::translation::{LanguageCode, LanguagePair, get_lang};

#[test]
fn test_getLang_withValidInput_shouldReturnCode() {
    assert_eq!(get_lang("english").unwrap().as_str(), "en");
    assert_eq!(get_lang("French").unwrap(), get_lang("fr").unwrap());
    assert_eq!(get_lang("auto").unwrap(), LanguageCode::AUTO);
}

#[test]
fn test_getLang_withInvalidInput_shouldReturnError() {
    let err = get_lang("klingon").unwrap_err();
    assert_eq!(err.input(), "klingon");
    assert_eq!(err.to_string(), "Language \"klingon\" not valid");
}

#[test]
fn test_languagePair_default_shouldBeAutoToEnglish() {
    let pair = LanguagePair::default();
    assert_eq!(pair.source.as_str(), DEFAULT_SOURCE_LANGUAGE);
    assert_eq!(pair.target.as_str(), DEFAULT_TARGET_LANGUAGE);
    assert_eq!(pair.to_string(), "auto -> en");
}

#[test]
fn test_forRequest_withTargetName_shouldResolveBoth() {
    let pair = LanguagePair::for_request("French", "auto").unwrap();
    assert_eq!(pair.target.as_str(), "fr");
    assert_eq!(pair.source.as_str(), "auto");
}

#[test]
fn test_forRequest_withSourceOverride_shouldResolveTargetToo() {
    let pair = LanguagePair::for_request("en", "Japanese").unwrap();
    assert_eq!(pair.source.as_str(), "ja");
    assert_eq!(pair.target.as_str(), "en");
}

#[test]
fn test_forRequest_withInvalidTarget_shouldFail() {
    let err = LanguagePair::for_request("klingon", "auto").unwrap_err();
    assert_eq!(err.input(), "klingon");
}

#[test]
fn test_overridesDefaults_shouldCompareExactly() {
    assert!(!LanguagePair::overrides_defaults("en", "auto"));
    assert!(LanguagePair::overrides_defaults("fr", "auto"));
    assert!(LanguagePair::overrides_defaults("en", "ja"));
    assert!(LanguagePair::overrides_defaults("English", "auto"));
}

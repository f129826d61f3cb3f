/*!
 * Tests for browser engine selection
 */

use honyaku::browser::{BrowserEngine, Locator};

#[test]
fn test_fromName_withKnownNames_shouldSelectEngine() {
    assert_eq!(BrowserEngine::from_name("chrome"), BrowserEngine::Chrome);
    assert_eq!(BrowserEngine::from_name("Firefox"), BrowserEngine::Firefox);
    assert_eq!(BrowserEngine::from_name("SAFARI"), BrowserEngine::Safari);
    assert_eq!(BrowserEngine::from_name(" edge "), BrowserEngine::Edge);
}

#[test]
fn test_fromName_withUnknownName_shouldFallBackToChrome() {
    assert_eq!(BrowserEngine::from_name("netscape"), BrowserEngine::Chrome);
    assert_eq!(BrowserEngine::from_name(""), BrowserEngine::Chrome);
    assert_eq!(BrowserEngine::from_name("chorme"), BrowserEngine::default());
}

#[test]
fn test_fromStr_withUnknownName_shouldFail() {
    assert!("netscape".parse::<BrowserEngine>().is_err());
    assert_eq!("gecko".parse::<BrowserEngine>().unwrap(), BrowserEngine::Firefox);
}

#[test]
fn test_all_shouldCoverEveryFamilyWithDistinctDrivers() {
    let engines = BrowserEngine::all();
    assert_eq!(engines.len(), 4);

    let mut ports: Vec<u16> = engines.iter().map(|e| e.default_driver_port()).collect();
    ports.sort();
    ports.dedup();
    assert_eq!(ports.len(), 4);

    assert_eq!(BrowserEngine::Chrome.default_driver_binary(), "chromedriver");
    assert_eq!(BrowserEngine::Firefox.default_driver_binary(), "geckodriver");
    assert_eq!(BrowserEngine::Safari.default_driver_binary(), "safaridriver");
    assert_eq!(BrowserEngine::Edge.default_driver_binary(), "msedgedriver");
}

#[test]
fn test_display_shouldRoundTripThroughFromStr() {
    for engine in BrowserEngine::all() {
        assert_eq!(engine.to_string().parse::<BrowserEngine>().unwrap(), engine);
    }
}

#[test]
fn test_locatorParse_shouldPickStrategy() {
    assert_eq!(Locator::parse("#source"), Locator::Css("#source".to_string()));
    assert_eq!(Locator::parse("xpath://div[1]"), Locator::XPath("//div[1]".to_string()));
    assert_eq!(Locator::parse(".translation").strategy(), "css selector");
    assert_eq!(Locator::parse("xpath://p").strategy(), "xpath");
}

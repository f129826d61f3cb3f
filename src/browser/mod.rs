/*!
 * Browser automation through the WebDriver protocol.
 *
 * - `engine`: supported browser engines and their capabilities
 * - `webdriver`: the `WebDriver` trait a translator session drives
 * - `client`: W3C WebDriver HTTP client
 * - `launcher`: spawning and stopping local driver binaries
 */

pub mod client;
pub mod engine;
pub mod launcher;
pub mod webdriver;

pub use client::WebDriverClient;
pub use engine::BrowserEngine;
pub use launcher::DriverProcess;
pub use webdriver::{ElementRef, Locator, WebDriver};

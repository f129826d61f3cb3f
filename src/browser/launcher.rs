use log::{debug, info, warn};
use reqwest::Client;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::{Child, Command};

use super::engine::BrowserEngine;
use crate::app_config::DriverConfig;
use crate::errors::DriverError;

/// Interval between readiness probes while a driver starts up
const READY_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A locally spawned WebDriver binary
///
/// The child process is killed when this value is dropped.
#[derive(Debug)]
pub struct DriverProcess {
    child: Child,
    engine: BrowserEngine,
    base_url: String,
}

impl DriverProcess {
    /// Spawn the driver for `engine` and wait until it reports ready
    pub async fn launch(
        engine: BrowserEngine,
        driver: &DriverConfig,
        startup_timeout: Duration,
    ) -> Result<Self, DriverError> {
        let base_url = format!("http://127.0.0.1:{}", driver.port);

        info!("Starting {} driver '{}' on port {}", engine.display_name(), driver.binary, driver.port);

        let child = Command::new(&driver.binary)
            .args(engine.port_args(driver.port))
            .args(&driver.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| DriverError::LaunchFailed(format!("Failed to start '{}': {}", driver.binary, e)))?;

        let mut process = Self {
            child,
            engine,
            base_url,
        };
        process.wait_until_ready(startup_timeout).await?;
        Ok(process)
    }

    /// URL the driver listens on
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn engine(&self) -> BrowserEngine {
        self.engine
    }

    /// Kill the driver and reap it
    pub async fn shutdown(mut self) -> Result<(), DriverError> {
        if let Ok(Some(status)) = self.child.try_wait() {
            debug!("{} driver already exited with {}", self.engine.display_name(), status);
            return Ok(());
        }

        self.child
            .kill()
            .await
            .map_err(|e| DriverError::RequestFailed(format!("Failed to stop driver: {}", e)))?;
        debug!("Stopped {} driver", self.engine.display_name());
        Ok(())
    }

    async fn wait_until_ready(&mut self, startup_timeout: Duration) -> Result<(), DriverError> {
        let client = Client::builder()
            .timeout(READY_POLL_INTERVAL * 10)
            .build()
            .map_err(|e| DriverError::LaunchFailed(format!("Failed to build HTTP client: {}", e)))?;
        let status_url = format!("{}/status", self.base_url);
        let started = Instant::now();

        loop {
            match self.child.try_wait() {
                Ok(Some(status)) => {
                    return Err(DriverError::LaunchFailed(format!(
                        "{} driver exited during startup with {}",
                        self.engine.display_name(),
                        status
                    )));
                }
                Ok(None) => {}
                Err(e) => {
                    return Err(DriverError::LaunchFailed(format!("Failed to poll driver process: {}", e)));
                }
            }

            if let Ok(response) = client.get(&status_url).send().await {
                if response.status().is_success() {
                    debug!(
                        "{} driver ready after {} ms",
                        self.engine.display_name(),
                        started.elapsed().as_millis()
                    );
                    return Ok(());
                }
            }

            if started.elapsed() >= startup_timeout {
                warn!("{} driver did not answer on {}", self.engine.display_name(), status_url);
                // kill_on_drop reaps the child once the error drops us
                return Err(DriverError::LaunchFailed(format!(
                    "{} driver not ready within {} s",
                    self.engine.display_name(),
                    startup_timeout.as_secs()
                )));
            }

            tokio::time::sleep(READY_POLL_INTERVAL).await;
        }
    }
}

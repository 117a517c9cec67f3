/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Harness builder for fluent configuration.
//!
//! Collects the session options, the catalog identity, the scenario and the
//! handler, then connects and runs in one call.

use crate::driver::SessionDriver;
use crate::handler::{FrameHandler, NoOpHandler};
use crate::scenario::Scenario;
use fixprobe_catalog::{Catalog, CatalogConfig};
use fixprobe_core::error::{FixError, SessionError};
use fixprobe_session::SessionConfig;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Builder for a harness run.
#[derive(Debug)]
pub struct HarnessBuilder<H: FrameHandler = NoOpHandler> {
    /// Frame callback handler.
    handler: Arc<H>,
    /// Connection options.
    session: Option<SessionConfig>,
    /// Identity for built messages.
    catalog: Option<CatalogConfig>,
    /// Steps to execute.
    scenario: Option<Scenario>,
}

impl Default for HarnessBuilder<NoOpHandler> {
    fn default() -> Self {
        Self::new()
    }
}

impl HarnessBuilder<NoOpHandler> {
    /// Creates a builder with a no-op handler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handler: Arc::new(NoOpHandler),
            session: None,
            catalog: None,
            scenario: None,
        }
    }
}

impl<H: FrameHandler> HarnessBuilder<H> {
    /// Sets the frame handler.
    #[must_use]
    pub fn with_handler<B: FrameHandler>(self, handler: B) -> HarnessBuilder<B> {
        HarnessBuilder {
            handler: Arc::new(handler),
            session: self.session,
            catalog: self.catalog,
            scenario: self.scenario,
        }
    }

    /// Sets the connection options.
    #[must_use]
    pub fn with_session(mut self, config: SessionConfig) -> Self {
        self.session = Some(config);
        self
    }

    /// Sets the identity stamped into every message.
    #[must_use]
    pub fn with_catalog(mut self, config: CatalogConfig) -> Self {
        self.catalog = Some(config);
        self
    }

    /// Sets the scenario to run.
    #[must_use]
    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Returns the handler.
    #[must_use]
    pub fn handler(&self) -> Arc<H> {
        Arc::clone(&self.handler)
    }

    /// Returns the configured scenario, if any.
    #[must_use]
    pub const fn scenario(&self) -> Option<&Scenario> {
        self.scenario.as_ref()
    }

    /// Connects and runs the scenario until it ends, the stream closes or
    /// `cancel` fires.
    ///
    /// # Errors
    /// Returns `SessionError::Configuration` if a part is missing, then any
    /// error from [`SessionDriver::connect`] or [`SessionDriver::run`].
    pub async fn run(self, cancel: &CancellationToken) -> Result<(), FixError> {
        let session = self.session.ok_or_else(|| missing("session configuration"))?;
        let catalog = Catalog::new(self.catalog.ok_or_else(|| missing("catalog configuration"))?);
        let scenario = self.scenario.ok_or_else(|| missing("scenario"))?;

        let mut driver = SessionDriver::connect(session).await?;
        driver
            .run(&scenario, &catalog, self.handler.as_ref(), cancel)
            .await?;
        info!(scenario = scenario.name(), state = %driver.state(), "Harness finished");
        Ok(())
    }
}

fn missing(what: &str) -> SessionError {
    SessionError::Configuration(format!("{what} is required"))
}

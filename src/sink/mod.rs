//! Remote submission targets.
//!
//! Each backend implements [`WorkLogSink`]; `push` only ever talks to the
//! trait, the concrete sink is picked from [`Config::backend()`].

pub mod gateway;
pub mod personio;

pub use gateway::{GatewayRoute, GatewaySink};
pub use personio::PersonioSink;

use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::models::attendance::AttendanceRecord;
use std::time::Duration;

/// Request timeout of every remote call.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// What the remote side answered, one body per request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub responses: Vec<String>,
}

pub trait WorkLogSink {
    /// Short name used in messages and the journal.
    fn name(&self) -> &str;

    /// Submit all records. Any error means the push did not complete and the
    /// caller must keep its local state.
    fn submit(&self, records: &[AttendanceRecord]) -> AppResult<SubmitReceipt>;
}

/// Build the sink selected by the configuration. Missing credentials are
/// reported here, before any network traffic.
pub fn from_config(cfg: &Config) -> AppResult<Box<dyn WorkLogSink>> {
    let sink: Box<dyn WorkLogSink> = match cfg.backend()? {
        Backend::Plog => Box::new(GatewaySink::new(
            cfg.gateway_settings()?,
            GatewayRoute::Plog,
        )?),
        Backend::Gateway => Box::new(GatewaySink::new(
            cfg.gateway_settings()?,
            GatewayRoute::Short,
        )?),
        Backend::Personio => Box::new(PersonioSink::new(cfg.personio_settings()?)?),
    };
    Ok(sink)
}

pub(crate) fn http_client() -> AppResult<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(concat!("plog/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

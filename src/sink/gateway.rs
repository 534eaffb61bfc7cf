//! Bearer token gateway in front of the HR API.

use super::{SubmitReceipt, WorkLogSink, http_client, join_url};
use crate::config::GatewaySettings;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendancePayload, AttendanceRecord};
use crate::ui::messages::{block, info};
use reqwest::blocking::Client;

/// Where the gateway exposes the attendances endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayRoute {
    Plog,
    Short,
}

impl GatewayRoute {
    pub fn path(&self) -> &'static str {
        match self {
            GatewayRoute::Plog => "/api/plog/attendances",
            GatewayRoute::Short => "/attendances",
        }
    }
}

pub struct GatewaySink {
    client: Client,
    settings: GatewaySettings,
    route: GatewayRoute,
}

impl GatewaySink {
    pub fn new(settings: GatewaySettings, route: GatewayRoute) -> AppResult<Self> {
        Ok(Self {
            client: http_client()?,
            settings,
            route,
        })
    }

    pub fn endpoint(&self) -> String {
        join_url(&self.settings.base_url, self.route.path())
    }
}

impl WorkLogSink for GatewaySink {
    fn name(&self) -> &str {
        match self.route {
            GatewayRoute::Plog => "Plog API",
            GatewayRoute::Short => "gateway API",
        }
    }

    fn submit(&self, records: &[AttendanceRecord]) -> AppResult<SubmitReceipt> {
        let payload = AttendancePayload {
            attendances: records,
        };

        info(format!("Sending the following data to {}:", self.name()));
        block(serde_json::to_string_pretty(&payload)?);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.settings.token)
            .json(&payload)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(AppError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        Ok(SubmitReceipt {
            responses: vec![body],
        })
    }
}

/// Admin call: fetch the personal API token of the user owning `email`.
pub fn fetch_user_token(base_url: &str, function_key: &str, email: &str) -> AppResult<String> {
    let response = http_client()?
        .get(join_url(base_url, "/api/plog/token"))
        .query(&[("email", email)])
        .header("x-functions-key", function_key)
        .send()?;

    let status = response.status();
    let body = response.text()?;

    if !status.is_success() {
        return Err(AppError::Remote {
            status: status.as_u16(),
            body,
        });
    }

    let token = body.trim().trim_matches('"').to_string();
    if token.is_empty() {
        return Err(AppError::InvalidResponse("empty token".into()));
    }
    Ok(token)
}

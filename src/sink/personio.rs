//! Basic auth + bearer token flow against the work hours API.

use super::{SubmitReceipt, WorkLogSink, http_client, join_url};
use crate::config::PersonioSettings;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceRecord, WorkHoursEntry};
use crate::ui::messages::{block, info};
use reqwest::blocking::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AuthResponse {
    data: AuthData,
}

#[derive(Debug, Deserialize)]
struct AuthData {
    token: String,
}

/// Posts one work-hours entry per record.
///
/// Entries are sent one by one. When entry N fails, entries 1..N-1 are
/// already stored remotely and a retry will send them again.
pub struct PersonioSink {
    client: Client,
    settings: PersonioSettings,
}

impl PersonioSink {
    pub fn new(settings: PersonioSettings) -> AppResult<Self> {
        Ok(Self {
            client: http_client()?,
            settings,
        })
    }

    /// Exchange the API key/secret for a bearer token.
    pub fn authenticate(&self) -> AppResult<String> {
        let response = self
            .client
            .post(join_url(&self.settings.base_url, "/auth"))
            .basic_auth(&self.settings.key, Some(&self.settings.secret))
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(AppError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let auth: AuthResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::InvalidResponse(format!("{} in auth response: {}", e, body)))?;
        Ok(auth.data.token)
    }

    fn post_entry(&self, token: &str, entry: &WorkHoursEntry) -> AppResult<String> {
        let response = self
            .client
            .post(join_url(&self.settings.base_url, "/work_hours"))
            .bearer_auth(token)
            .json(entry)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(AppError::Remote {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

impl WorkLogSink for PersonioSink {
    fn name(&self) -> &str {
        "Personio API"
    }

    fn submit(&self, records: &[AttendanceRecord]) -> AppResult<SubmitReceipt> {
        let token = self.authenticate()?;
        let entries: Vec<WorkHoursEntry> = records.iter().map(WorkHoursEntry::from).collect();
        let total = entries.len();

        let mut receipt = SubmitReceipt::default();

        for (accepted, entry) in entries.iter().enumerate() {
            info(format!(
                "Sending work hours {}/{} to {}:",
                accepted + 1,
                total,
                self.name()
            ));
            block(serde_json::to_string_pretty(entry)?);

            match self.post_entry(&token, entry) {
                Ok(body) => receipt.responses.push(body),
                Err(e) if accepted == 0 => return Err(e),
                Err(e) => {
                    return Err(AppError::PartialSubmission {
                        accepted,
                        total,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(receipt)
    }
}

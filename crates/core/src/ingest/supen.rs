use crate::config::Settings;
use crate::domain::returns::Horizon;
use crate::ingest::{FetchError, HorizonReturns, ReturnsProvider};
use serde_json::Value;
use std::time::Duration;

/// Base URL for the SUPEN statistics API. Only HTTPS is documented.
pub const DEFAULT_BASE_URL: &str = "https://webapps.supen.fi.cr/Estadisticas/API";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

// The API wraps its record list under different keys depending on dataset.
const RECORD_WRAPPER_KEYS: [&str; 4] = ["datos", "data", "records", "result"];
const OPERATOR_CODE_KEYS: [&str; 3] = ["operadora", "operador", "codigo_operadora"];

/// Path and response-field name for one horizon's nominal-return endpoint.
#[derive(Debug, Clone)]
pub struct HorizonEndpoint {
    pub path: String,
    pub field: String,
}

/// Endpoint map for the SUPEN statistics API, passed explicitly into the
/// client. Operator-editable reference data; adjust paths and field names
/// against the official SUPEN manual (Guía para el uso de la API de
/// estadísticas SUPEN) when they drift.
#[derive(Debug, Clone)]
pub struct SupenEndpoints {
    pub base_url: String,
    pub short: HorizonEndpoint,
    pub medium: HorizonEndpoint,
    pub long: HorizonEndpoint,
}

impl Default for SupenEndpoints {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl SupenEndpoints {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            short: HorizonEndpoint {
                path: "/rendimientos/nominal/12meses".to_string(),
                field: "rendimiento".to_string(),
            },
            medium: HorizonEndpoint {
                path: "/rendimientos/nominal/36meses".to_string(),
                field: "rendimiento".to_string(),
            },
            long: HorizonEndpoint {
                path: "/rendimientos/nominal/60meses".to_string(),
                field: "rendimiento".to_string(),
            },
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        match settings.supen_base_url.as_deref() {
            Some(url) => Self::with_base_url(url),
            None => Self::default(),
        }
    }

    pub fn endpoint(&self, horizon: Horizon) -> &HorizonEndpoint {
        match horizon {
            Horizon::Short => &self.short,
            Horizon::Medium => &self.medium,
            Horizon::Long => &self.long,
        }
    }

    fn validate(&self) -> Result<(), FetchError> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(FetchError::Config("base URL must be non-empty".to_string()));
        }
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(FetchError::Config(format!(
                "base URL must be http(s), got {base}"
            )));
        }
        for horizon in Horizon::ALL {
            let ep = self.endpoint(horizon);
            if ep.path.trim().is_empty() || ep.field.trim().is_empty() {
                return Err(FetchError::Config(format!(
                    "endpoint for horizon {} must have a path and a field",
                    horizon.label()
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SupenClient {
    http: reqwest::Client,
    endpoints: SupenEndpoints,
}

impl SupenClient {
    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        let endpoints = SupenEndpoints::from_settings(settings);
        let timeout_secs = settings.supen_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);

        // SUPEN's certificate chain fails validation from some networks, so
        // verification ships off like the original tooling. Set
        // SUPEN_ACCEPT_INVALID_CERTS=false once the chain is trusted.
        let accept_invalid_certs = settings.supen_accept_invalid_certs.unwrap_or(true);

        Self::new(
            endpoints,
            Duration::from_secs(timeout_secs),
            accept_invalid_certs,
        )
    }

    pub fn new(
        endpoints: SupenEndpoints,
        timeout: Duration,
        accept_invalid_certs: bool,
    ) -> Result<Self, FetchError> {
        endpoints.validate()?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(|err| {
                FetchError::Config(format!("failed to build SUPEN http client: {err}"))
            })?;

        Ok(Self { http, endpoints })
    }

    fn url(&self, horizon: Horizon) -> String {
        let ep = self.endpoints.endpoint(horizon);
        let path = if ep.path.starts_with('/') {
            ep.path.clone()
        } else {
            format!("/{}", ep.path)
        };

        format!("{}{}", self.endpoints.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait::async_trait]
impl ReturnsProvider for SupenClient {
    fn source_name(&self) -> &'static str {
        "supen_statistics_api"
    }

    async fn fetch_horizon(&self, horizon: Horizon) -> Result<HorizonReturns, FetchError> {
        let url = self.url(horizon);
        let field = &self.endpoints.endpoint(horizon).field;

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.clone(),
                source,
            })?;

        let status = res.status();
        let text = res.text().await.map_err(|source| FetchError::Network {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url,
                status,
                body: excerpt(&text),
            });
        }

        let body: Value = serde_json::from_str(&text).map_err(|err| FetchError::Parse {
            url: url.clone(),
            detail: format!("response is not valid JSON: {err}"),
        })?;

        let records = locate_records(&body).ok_or_else(|| FetchError::Parse {
            url: url.clone(),
            detail: "could not locate a list of records in the response".to_string(),
        })?;

        let mut out = HorizonReturns::new();
        for rec in records {
            let Some(code) = record_code(rec) else {
                tracing::debug!(%url, "skipping record without an operator code");
                continue;
            };
            let Some(value) = record_value(rec, field) else {
                tracing::debug!(%url, %code, %field, "skipping record without a usable return value");
                continue;
            };
            out.insert(code, value);
        }

        tracing::info!(
            horizon = horizon.label(),
            entries = out.len(),
            "fetched horizon returns"
        );
        Ok(out)
    }
}

fn locate_records(body: &Value) -> Option<&Vec<Value>> {
    match body {
        Value::Array(list) => Some(list),
        Value::Object(map) => RECORD_WRAPPER_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array)),
        _ => None,
    }
}

fn record_code(rec: &Value) -> Option<String> {
    for key in OPERATOR_CODE_KEYS {
        if let Some(Value::String(s)) = rec.get(key) {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

// Return figures arrive both as JSON numbers and as numeric strings.
fn record_value(rec: &Value, field: &str) -> Option<f64> {
    match rec.get(field)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn excerpt(text: &str) -> String {
    const MAX_CHARS: usize = 200;
    let trimmed = text.trim();
    if trimmed.chars().count() <= MAX_CHARS {
        trimmed.to_string()
    } else {
        trimmed.chars().take(MAX_CHARS).collect()
    }
}

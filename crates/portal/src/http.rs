use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use shared_types::{
    AdminCredentials, ApiConfig, ApiResponse, AppError, Appointment, AppointmentList,
    AppointmentQuery, Doctor, DoctorFilter, DoctorList, Login, NewDoctor,
    PatientAppointmentFilter, PatientSignup, TokenResponse,
};

use crate::api::HospitalApi;

/// `HospitalApi` over HTTP with `reqwest` (browser fetch on wasm32).
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.normalized_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join percent-encoded path segments onto the base URL.
    fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    /// Send a request and return the status with the raw body text.
    async fn send(&self, request: RequestBuilder) -> Result<(u16, String), AppError> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::network(format!("request failed: {e}")))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(format!("failed to read response body: {e}")))?;
        Ok((status, body))
    }

    async fn get_list<T, L>(&self, request: RequestBuilder, what: &str) -> Result<Vec<T>, AppError>
    where
        L: serde::de::DeserializeOwned + Into<Vec<T>>,
    {
        let (status, body) = self.send(request).await?;
        if !is_success(status) {
            return Err(AppError::from_status(
                status,
                read_message(&body, &format!("Failed to load {what}")),
            ));
        }
        let list: L = serde_json::from_str(&body)
            .map_err(|e| AppError::decode(format!("invalid {what} response: {e}")))?;
        Ok(list.into())
    }

    async fn login<B: serde::Serialize + ?Sized>(
        &self,
        url: String,
        body: &B,
    ) -> Result<ApiResponse<String>, AppError> {
        let (status, text) = self.send(self.client.post(url).json(body)).await?;
        if !is_success(status) {
            return Ok(ApiResponse::failed(read_message(&text, "Invalid credentials")));
        }
        match read_token(&text) {
            Some(token) => Ok(ApiResponse::ok("Login successful", token)),
            None => Err(AppError::decode("login response carried no token")),
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Extract a human-readable message from a response body.
///
/// Tries a JSON `message` or `error` field, then a JSON string, then the
/// plain text, and finally `fallback`.
pub(crate) fn read_message(body: &str, fallback: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string()),
        Ok(Value::String(s)) if !s.trim().is_empty() => s,
        Ok(_) => fallback.to_string(),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => fallback.to_string(),
    }
}

/// Extract a token from `{ "token": ... }`, a JSON string, or a bare body.
pub(crate) fn read_token(body: &str) -> Option<String> {
    if let Ok(resp) = serde_json::from_str::<TokenResponse>(body) {
        return Some(resp.token).filter(|t| !t.is_empty());
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(s)) if !s.is_empty() => Some(s),
        Ok(_) => None,
        Err(_) => Some(body.trim().to_string()).filter(|t| !t.is_empty()),
    }
}

#[async_trait(?Send)]
impl HospitalApi for HttpApi {
    #[tracing::instrument(skip(self))]
    async fn list_doctors(&self) -> Result<Vec<Doctor>, AppError> {
        let request = self.client.get(self.url(&["doctor"]));
        self.get_list::<Doctor, DoctorList>(request, "doctors").await
    }

    #[tracing::instrument(skip(self))]
    async fn filter_doctors(&self, filter: &DoctorFilter) -> Result<Vec<Doctor>, AppError> {
        let [name, time, specialty] = filter.path_segments();
        let request = self
            .client
            .get(self.url(&["doctor", "filter", name, time, specialty]));
        self.get_list::<Doctor, DoctorList>(request, "doctors").await
    }

    #[tracing::instrument(skip(self, doctor, token), fields(email = %doctor.email))]
    async fn save_doctor(
        &self,
        doctor: &NewDoctor,
        token: &str,
    ) -> Result<ApiResponse<()>, AppError> {
        let request = self
            .client
            .post(self.url(&["doctor", token]))
            .bearer_auth(token)
            .json(doctor);
        let (status, body) = self.send(request).await?;
        if is_success(status) {
            Ok(ApiResponse::done(read_message(&body, "Doctor added successfully.")))
        } else {
            Ok(ApiResponse::failed(read_message(&body, "Failed to add doctor.")))
        }
    }

    #[tracing::instrument(skip(self, token))]
    async fn list_appointments(
        &self,
        query: &AppointmentQuery,
        token: &str,
    ) -> Result<Vec<Appointment>, AppError> {
        let date = query.date.format("%Y-%m-%d").to_string();
        let request = self
            .client
            .get(self.url(&["appointments", date.as_str(), query.name_segment(), token]))
            .bearer_auth(token);
        self.get_list::<Appointment, AppointmentList>(request, "appointments")
            .await
    }

    #[tracing::instrument(skip(self, token))]
    async fn patient_appointments(
        &self,
        filter: &PatientAppointmentFilter,
        token: &str,
    ) -> Result<Vec<Appointment>, AppError> {
        let [condition, name] = filter.path_segments();
        let request = self
            .client
            .get(self.url(&["patient", "filter", condition, name, token]))
            .bearer_auth(token);
        self.get_list::<Appointment, AppointmentList>(request, "appointments")
            .await
    }

    #[tracing::instrument(skip(self, signup), fields(email = %signup.email))]
    async fn patient_signup(&self, signup: &PatientSignup) -> Result<ApiResponse<()>, AppError> {
        let request = self.client.post(self.url(&["patient"])).json(signup);
        let (status, body) = self.send(request).await?;
        if is_success(status) {
            Ok(ApiResponse::done(read_message(&body, "Signup successful.")))
        } else {
            Ok(ApiResponse::failed(read_message(&body, "Signup failed.")))
        }
    }

    #[tracing::instrument(skip(self, login), fields(email = %login.email))]
    async fn patient_login(&self, login: &Login) -> Result<ApiResponse<String>, AppError> {
        self.login(self.url(&["patient", "login"]), login).await
    }

    #[tracing::instrument(skip(self, credentials), fields(username = %credentials.username))]
    async fn admin_login(
        &self,
        credentials: &AdminCredentials,
    ) -> Result<ApiResponse<String>, AppError> {
        self.login(self.url(&["admin"]), credentials).await
    }

    #[tracing::instrument(skip(self, login), fields(email = %login.email))]
    async fn doctor_login(&self, login: &Login) -> Result<ApiResponse<String>, AppError> {
        self.login(self.url(&["doctor", "login"]), login).await
    }
}

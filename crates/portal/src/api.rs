use async_trait::async_trait;
use shared_types::{
    AdminCredentials, ApiResponse, AppError, Appointment, AppointmentQuery, Doctor, DoctorFilter,
    Login, NewDoctor, PatientAppointmentFilter, PatientSignup,
};

/// One method per backend operation the portal consumes.
///
/// List operations return `Err` for transport failures and non-success
/// statuses alike. Operations with a business outcome (logins, sign-up,
/// doctor creation) return `Ok(ApiResponse)` with `success: false` for a
/// rejected request and reserve `Err` for transport failures.
///
/// Futures are not `Send` so the same trait serves the browser fetch
/// backend and native tests.
#[async_trait(?Send)]
pub trait HospitalApi {
    async fn list_doctors(&self) -> Result<Vec<Doctor>, AppError>;

    async fn filter_doctors(&self, filter: &DoctorFilter) -> Result<Vec<Doctor>, AppError>;

    async fn save_doctor(
        &self,
        doctor: &NewDoctor,
        token: &str,
    ) -> Result<ApiResponse<()>, AppError>;

    async fn list_appointments(
        &self,
        query: &AppointmentQuery,
        token: &str,
    ) -> Result<Vec<Appointment>, AppError>;

    async fn patient_appointments(
        &self,
        filter: &PatientAppointmentFilter,
        token: &str,
    ) -> Result<Vec<Appointment>, AppError>;

    async fn patient_signup(&self, signup: &PatientSignup) -> Result<ApiResponse<()>, AppError>;

    /// On success `data` carries the token.
    async fn patient_login(&self, login: &Login) -> Result<ApiResponse<String>, AppError>;

    /// On success `data` carries the token.
    async fn admin_login(
        &self,
        credentials: &AdminCredentials,
    ) -> Result<ApiResponse<String>, AppError>;

    /// On success `data` carries the token.
    async fn doctor_login(&self, login: &Login) -> Result<ApiResponse<String>, AppError>;
}

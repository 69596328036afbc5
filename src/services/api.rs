// ============================================================================
// API CLIENT - HTTP only, no business logic
// ============================================================================
// Wraps every backend call under /api/v1/admin, attaching the bearer token
// from the session when present. Failures (transport, non-2xx, bad JSON)
// are all surfaced as Err(String); the client never retries and never
// redirects on 401 - each screen shows its own error.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};
use serde::Deserialize;

use crate::models::{
    Admin, AdminList, AdminPayload, Announcement, AnnouncementPayload, AttendanceFilter,
    AttendanceLocation, AttendanceRecord, DashboardData, DeviceChangeRequest, LoginRequest,
    LoginResponse, LocationPayload, RequestStatus, StatusUpdate, Student, StudentFilter,
    StudentPayload,
};
use crate::session::Session;
use crate::utils::API_URL;

/// Most endpoints wrap their payload as `{ status, data }`.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self {
            base_url: format!("{}/api/v1/admin", API_URL),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn get_data<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, String> {
        let mut builder = Request::get(&self.url(path));
        for (key, value) in query {
            builder = builder.query([(*key, value.as_str())]);
        }
        let response = self
            .with_auth(builder)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        let envelope = response
            .json::<Envelope<T>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;
        Ok(envelope.data)
    }

    /// Fire a mutation and discard the body. Every successful mutation is
    /// followed by a full refetch, so the returned record is never used.
    async fn send_ignoring_body(
        &self,
        builder: RequestBuilder,
        body: &impl serde::Serialize,
    ) -> Result<(), String> {
        let response = self
            .with_auth(builder)
            .json(body)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        Ok(())
    }

    // ---- auth -------------------------------------------------------------

    /// The only call that goes out without a bearer token.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, String> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        log::info!("🔐 Logging in as {}", username);
        let response = Request::post(&self.url("/auth/login"))
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    // ---- students ---------------------------------------------------------

    pub async fn list_students(&self, filter: &StudentFilter) -> Result<Vec<Student>, String> {
        self.get_data(
            "/student",
            &[
                ("department", filter.department.as_str().to_string()),
                ("year", filter.year.to_string()),
            ],
        )
        .await
    }

    pub async fn create_student(&self, payload: &StudentPayload) -> Result<(), String> {
        self.send_ignoring_body(Request::post(&self.url("/student")), payload)
            .await
    }

    pub async fn update_student(&self, id: &str, payload: &StudentPayload) -> Result<(), String> {
        self.send_ignoring_body(
            Request::put(&self.url(&format!("/student/{}", id))),
            payload,
        )
        .await
    }

    pub async fn delete_student(&self, id: &str) -> Result<(), String> {
        self.delete(&format!("/student/{}", id)).await
    }

    // ---- admins -----------------------------------------------------------

    pub async fn list_admins(&self) -> Result<Vec<Admin>, String> {
        let list: AdminList = self.get_data("", &[]).await?;
        Ok(list.admins)
    }

    pub async fn create_admin(&self, payload: &AdminPayload) -> Result<(), String> {
        self.send_ignoring_body(Request::post(&self.url("")), payload)
            .await
    }

    pub async fn update_admin(&self, id: &str, payload: &AdminPayload) -> Result<(), String> {
        self.send_ignoring_body(Request::put(&self.url(&format!("/{}", id))), payload)
            .await
    }

    pub async fn delete_admin(&self, id: &str) -> Result<(), String> {
        self.delete(&format!("/{}", id)).await
    }

    // ---- attendance locations ---------------------------------------------

    pub async fn list_locations(&self) -> Result<Vec<AttendanceLocation>, String> {
        self.get_data("/attendance-location", &[]).await
    }

    pub async fn create_location(&self, payload: &LocationPayload) -> Result<(), String> {
        self.send_ignoring_body(Request::post(&self.url("/attendance-location")), payload)
            .await
    }

    pub async fn update_location(&self, id: &str, payload: &LocationPayload) -> Result<(), String> {
        self.send_ignoring_body(
            Request::put(&self.url(&format!("/attendance-location/{}", id))),
            payload,
        )
        .await
    }

    pub async fn delete_location(&self, id: &str) -> Result<(), String> {
        self.delete(&format!("/attendance-location/{}", id)).await
    }

    // ---- attendance -------------------------------------------------------

    pub async fn list_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, String> {
        self.get_data(
            "/attendance",
            &[
                ("department", filter.department.as_str().to_string()),
                ("year", filter.year.to_string()),
                ("date", filter.date.clone()),
                ("session", filter.session.as_str().to_string()),
            ],
        )
        .await
    }

    // ---- announcements ----------------------------------------------------

    pub async fn list_announcements(&self) -> Result<Vec<Announcement>, String> {
        self.get_data("/announcement", &[]).await
    }

    pub async fn create_announcement(&self, payload: &AnnouncementPayload) -> Result<(), String> {
        self.send_ignoring_body(Request::post(&self.url("/announcement")), payload)
            .await
    }

    // ---- device change requests -------------------------------------------

    pub async fn list_device_requests(&self) -> Result<Vec<DeviceChangeRequest>, String> {
        self.get_data("/device-change/requests", &[]).await
    }

    pub async fn set_device_request_status(
        &self,
        id: &str,
        status: RequestStatus,
    ) -> Result<(), String> {
        log::info!("📱 Updating device change request {} to {}", id, status.as_str());
        self.send_ignoring_body(
            Request::put(&self.url(&format!("/device-change/requests/{}", id))),
            &StatusUpdate { status },
        )
        .await
    }

    // ---- dashboard --------------------------------------------------------

    pub async fn dashboard(&self) -> Result<DashboardData, String> {
        self.get_data("/dashboard", &[]).await
    }

    // ---- shared -----------------------------------------------------------

    async fn delete(&self, path: &str) -> Result<(), String> {
        let response = self
            .with_auth(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        Ok(())
    }
}

use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Backend ids arrive as strings or integers depending on the table.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

fn opt_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    MainTeam,
    Cadet,
    Member,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::MainTeam, Role::Cadet, Role::Member];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::MainTeam => "MAIN_TEAM",
            Role::Cadet => "CADET",
            Role::Member => "MEMBER",
            Role::Unknown => "UNKNOWN",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::MainTeam => "Main Team",
            Role::Cadet => "Cadet",
            Role::Member => "Member",
            Role::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub rfid_card: Option<String>,
    pub role: Role,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub rfid_card: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
    pub is_active: bool,
}

/// User info carried in the token's `user` claim and the login response.
/// Display only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default, deserialize_with = "opt_id_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl SessionUser {
    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.username.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub schedule_date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePayload {
    pub class_name: String,
    pub subject: String,
    pub instructor: String,
    pub room: String,
    pub schedule_date: String,
    pub start_time: String,
    pub end_time: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
    Excused,
    #[serde(other)]
    Unknown,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Late,
        AttendanceStatus::Absent,
        AttendanceStatus::Excused,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "PRESENT",
            AttendanceStatus::Late => "LATE",
            AttendanceStatus::Absent => "ABSENT",
            AttendanceStatus::Excused => "EXCUSED",
            AttendanceStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn parse(value: &str) -> Option<AttendanceStatus> {
        AttendanceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "bg-green-100 text-green-800",
            AttendanceStatus::Late => "bg-amber-100 text-amber-800",
            AttendanceStatus::Absent => "bg-red-100 text-red-800",
            AttendanceStatus::Excused => "bg-blue-100 text-blue-800",
            AttendanceStatus::Unknown => "bg-gray-100 text-gray-700",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub schedule_id: Option<String>,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub scan_time: Option<String>,
    #[serde(default)]
    pub is_late: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterRow {
    #[serde(deserialize_with = "id_string")]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub rfid_card: Option<String>,
    #[serde(default)]
    pub assigned_at: String,
    #[serde(default)]
    pub has_scanned: bool,
    #[serde(default)]
    pub attendance: Option<AttendanceRecord>,
}

impl RosterRow {
    pub fn key(&self) -> (String, String) {
        (self.user_id.clone(), self.assigned_at.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStats {
    #[serde(default)]
    pub total_assigned: u32,
    #[serde(default)]
    pub total_scanned: u32,
    #[serde(default)]
    pub total_not_scanned: u32,
    #[serde(default)]
    pub total_present: u32,
    #[serde(default)]
    pub total_late: u32,
}

impl RosterStats {
    /// `(present + late) / assigned` as a percentage, two decimals.
    pub fn attendance_rate(&self) -> Option<String> {
        if self.total_assigned == 0 {
            return None;
        }
        let rate = f64::from(self.total_present + self.total_late)
            / f64::from(self.total_assigned)
            * 100.0;
        Some(format!("{:.2}", rate))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRoster {
    #[serde(default)]
    pub schedule: Option<Schedule>,
    #[serde(default)]
    pub selected_date: Option<String>,
    #[serde(default)]
    pub attendance: Vec<RosterRow>,
    #[serde(default)]
    pub stats: Option<RosterStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastScan {
    #[serde(default, deserialize_with = "opt_id_string")]
    pub id: Option<String>,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub scan_time: Option<String>,
    #[serde(default)]
    pub user: Option<UserRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastAttendance {
    #[serde(default)]
    pub last_attendances: Vec<LastScan>,
}

impl LastAttendance {
    pub fn latest(&self) -> Option<&LastScan> {
        self.last_attendances.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceUpdate {
    pub status: AttendanceStatus,
    pub notes: String,
    pub is_late: bool,
}

impl AttendanceUpdate {
    pub fn new(status: AttendanceStatus, notes: impl Into<String>) -> Self {
        Self {
            status,
            notes: notes.into(),
            is_late: status == AttendanceStatus::Late,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualAttendanceRequest {
    pub user_id: String,
    pub schedule_id: String,
    pub status: AttendanceStatus,
    pub notes: String,
    pub scan_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    pub user_id: String,
    pub schedule_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableUser {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub rfid_card: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub members: u32,
    #[serde(default, alias = "guestUsers")]
    pub cadets: u32,
    #[serde(default, alias = "newMembers")]
    pub main_team: u32,
    #[serde(default)]
    pub total_members: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPeriod {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl ChartPeriod {
    pub const ALL: [ChartPeriod; 3] = [ChartPeriod::Daily, ChartPeriod::Weekly, ChartPeriod::Monthly];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartPeriod::Daily => "daily",
            ChartPeriod::Weekly => "weekly",
            ChartPeriod::Monthly => "monthly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartPeriod::Daily => "Daily",
            ChartPeriod::Weekly => "Weekly",
            ChartPeriod::Monthly => "Monthly",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartBucket {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub present: u32,
    #[serde(default)]
    pub permission: u32,
    #[serde(default)]
    pub sick: u32,
    #[serde(default)]
    pub absent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub schedule_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user: Option<UserRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    /// `success: false` envelope.
    pub fn app(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "APP_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    /// Server-supplied message for app errors, `fallback` for transport
    /// failures whose text is not meant for users.
    pub fn user_message(&self, fallback: &str) -> String {
        match self.code.as_str() {
            "APP_ERROR" | "UNAUTHORIZED" | "VALIDATION_ERROR" if !self.error.trim().is_empty() => {
                self.error.clone()
            }
            "REQUEST_FAILED" if self.details.is_some() && !self.error.trim().is_empty() => {
                self.error.clone()
            }
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_codes() {
        assert_eq!(ApiError::validation("bad").code, "VALIDATION_ERROR");
        assert_eq!(ApiError::app("nope").code, "APP_ERROR");
        assert_eq!(ApiError::request_failed("net").code, "REQUEST_FAILED");
        assert!(ApiError::unauthorized("expired").is_unauthorized());
        assert!(ApiError::unknown("x").details.is_none());
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");
        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn user_message_prefers_server_text_for_app_errors() {
        assert_eq!(
            ApiError::app("Schedule not found").user_message("Failed"),
            "Schedule not found"
        );
        assert_eq!(
            ApiError::request_failed("Request failed: dns error").user_message("Failed"),
            "Failed"
        );
        let mut with_body = ApiError::request_failed("Duplicate RFID card");
        with_body.details = Some(json!({ "status": 409 }));
        assert_eq!(with_body.user_message("Failed"), "Duplicate RFID card");
    }

    #[test]
    fn user_accepts_numeric_ids_and_defaults_active() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "username": "faris",
            "fullName": "Faris Sofyan",
            "email": "faris@example.com",
            "rfidCard": "A1B2",
            "role": "MAIN_TEAM"
        }))
        .unwrap();
        assert_eq!(user.id, "7");
        assert_eq!(user.role, Role::MainTeam);
        assert!(user.is_active);
    }

    #[test]
    fn unknown_role_and_status_do_not_fail_decoding() {
        let user: User = serde_json::from_value(json!({
            "id": "u1", "username": "x", "role": "GUEST"
        }))
        .unwrap();
        assert_eq!(user.role, Role::Unknown);
        let record: AttendanceRecord = serde_json::from_value(json!({
            "id": 1, "status": "SICK"
        }))
        .unwrap();
        assert_eq!(record.status, AttendanceStatus::Unknown);
    }

    #[test]
    fn user_payload_omits_empty_password() {
        let payload = UserPayload {
            username: "a".into(),
            full_name: "A".into(),
            email: "a@example.com".into(),
            rfid_card: "X1".into(),
            password: None,
            role: Role::Member,
            is_active: true,
        };
        let value = serde_json::to_value(payload).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["rfidCard"], "X1");
        assert_eq!(value["role"], "MEMBER");
    }

    #[test]
    fn dashboard_stats_accept_legacy_keys() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "members": 7, "guestUsers": 2, "newMembers": 9, "totalMembers": 18
        }))
        .unwrap();
        assert_eq!(stats.cadets, 2);
        assert_eq!(stats.main_team, 9);
    }

    #[test]
    fn attendance_update_flags_late() {
        assert!(AttendanceUpdate::new(AttendanceStatus::Late, "").is_late);
        assert!(!AttendanceUpdate::new(AttendanceStatus::Present, "").is_late);
    }

    #[test]
    fn attendance_rate_uses_two_decimals() {
        let stats = RosterStats {
            total_assigned: 3,
            total_present: 1,
            total_late: 1,
            ..Default::default()
        };
        assert_eq!(stats.attendance_rate().as_deref(), Some("66.67"));
        assert!(RosterStats::default().attendance_rate().is_none());
    }

    #[test]
    fn api_error_can_be_converted_to_view() {
        let _: View = ApiError::request_failed("request failed").into_view();
    }
}

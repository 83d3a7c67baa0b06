use crate::api::{
    ApiClient, ApiError, AssignmentRequest, AttendanceRoster, AttendanceUpdate, AvailableUser,
    LastAttendance, ManualAttendanceRequest, Schedule,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl Default for AttendanceRepository {
    fn default() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }
}

impl AttendanceRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_schedules(&self) -> Result<Vec<Schedule>, ApiError> {
        self.client.get_schedules().await
    }

    pub async fn fetch_roster(&self, schedule_id: &str, date: &str) -> Result<AttendanceRoster, ApiError> {
        self.client.get_attendance_by_schedule(schedule_id, date).await
    }

    pub async fn fetch_last_attendance(&self, schedule_id: &str) -> Result<LastAttendance, ApiError> {
        self.client.get_last_attendance(schedule_id).await
    }

    pub async fn update_attendance(&self, id: &str, update: &AttendanceUpdate) -> Result<(), ApiError> {
        self.client.update_attendance(id, update).await
    }

    pub async fn delete_attendance(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_attendance(id).await
    }

    pub async fn create_manual(&self, request: &ManualAttendanceRequest) -> Result<(), ApiError> {
        self.client.create_manual_attendance(request).await
    }

    pub async fn search_available_users(
        &self,
        schedule_id: &str,
        search: &str,
    ) -> Result<Vec<AvailableUser>, ApiError> {
        self.client.get_available_users(schedule_id, search).await
    }

    pub async fn assign_user(&self, user_id: &str, schedule_id: &str) -> Result<(), ApiError> {
        self.client
            .assign_user(&AssignmentRequest {
                user_id: user_id.to_string(),
                schedule_id: schedule_id.to_string(),
            })
            .await
    }

    pub async fn remove_assignment(&self, schedule_id: &str, user_id: &str) -> Result<(), ApiError> {
        self.client.remove_assignment(schedule_id, user_id).await
    }
}

use serde_json::json;

use super::{
    client::ApiClient,
    types::{
        ApiError, AttendanceRoster, AttendanceUpdate, AvailableUser, ChartBucket, ChartPeriod,
        LastAttendance, ManualAttendanceRequest,
    },
};

impl ApiClient {
    /// `date` must already be `YYYY-MM-DD`.
    pub async fn get_attendance_by_schedule(
        &self,
        schedule_id: &str,
        date: &str,
    ) -> Result<AttendanceRoster, ApiError> {
        let mut envelope = self
            .get(
                &format!("/attendance/by-schedule/{}", schedule_id),
                &[("date", date.to_string())],
            )
            .await?;
        Ok(envelope.take_optional("data")?.unwrap_or_default())
    }

    pub async fn get_last_attendance(&self, schedule_id: &str) -> Result<LastAttendance, ApiError> {
        let mut envelope = self
            .get(&format!("/attendance/last/schedule/{}", schedule_id), &[])
            .await?;
        Ok(envelope.take_optional("data")?.unwrap_or_default())
    }

    pub async fn update_attendance(&self, id: &str, update: &AttendanceUpdate) -> Result<(), ApiError> {
        self.patch(&format!("/attendance/update/{}", id), json!(update))
            .await
            .map(|_| ())
    }

    pub async fn delete_attendance(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/attendance/delete/{}", id))
            .await
            .map(|_| ())
    }

    pub async fn create_manual_attendance(
        &self,
        request: &ManualAttendanceRequest,
    ) -> Result<(), ApiError> {
        self.post("/attendance/manual", json!(request))
            .await
            .map(|_| ())
    }

    pub async fn get_available_users(
        &self,
        schedule_id: &str,
        search: &str,
    ) -> Result<Vec<AvailableUser>, ApiError> {
        let mut envelope = self
            .get(
                "/attendance/users/available",
                &[
                    ("scheduleId", schedule_id.to_string()),
                    ("search", search.trim().to_string()),
                ],
            )
            .await?;
        Ok(envelope.take_optional("users")?.unwrap_or_default())
    }

    pub async fn get_attendance_chart(&self, period: ChartPeriod) -> Result<Vec<ChartBucket>, ApiError> {
        let mut envelope = self
            .get(
                "/attendance/chart",
                &[("period", period.as_str().to_string())],
            )
            .await?;
        Ok(envelope.take_optional("data")?.unwrap_or_default())
    }
}

use super::{
    client::ApiClient,
    types::{ApiError, AuditLog},
};

impl ApiClient {
    pub async fn get_audit_logs(&self) -> Result<Vec<AuditLog>, ApiError> {
        let mut envelope = self.get("/audit-logs", &[]).await?;
        Ok(envelope.take_optional("logs")?.unwrap_or_default())
    }
}

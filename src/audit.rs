use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use uuid::Uuid;

use crate::{db::OrmConn, entity::audit_logs, error::AppResult};

pub async fn log_audit(
    conn: &OrmConn,
    user_id: Option<Uuid>,
    action: &str,
    resource: Option<&str>,
    metadata: Option<Value>,
) -> AppResult<()> {
    audit_logs::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        action: Set(action.to_string()),
        resource: Set(resource.map(str::to_string)),
        metadata: Set(metadata),
        created_at: Set(Utc::now().into()),
    }
    .insert(conn)
    .await?;

    Ok(())
}

/// Best-effort audit entry: failures are logged and never fail the action.
pub async fn record(conn: &OrmConn, user_id: Uuid, action: &str, resource: &str, metadata: Value) {
    if let Err(err) = log_audit(conn, Some(user_id), action, Some(resource), Some(metadata)).await {
        tracing::warn!(error = %err, action, "audit log failed");
    }
}

//! Log event factory.

use crate::factory::helpers::new_uuid;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a `member_join` log event at the given time.
pub async fn create_log_event_at(
    db: &DatabaseConnection,
    server_id: &str,
    created_at: DateTime<Utc>,
) -> Result<entity::log_event::Model, DbErr> {
    entity::log_event::ActiveModel {
        id: ActiveValue::Set(new_uuid()),
        server_id: ActiveValue::Set(server_id.to_string()),
        event_type: ActiveValue::Set("member_join".to_string()),
        actor_id: ActiveValue::Set(None),
        actor_name: ActiveValue::Set(None),
        target_id: ActiveValue::Set(Some("42".to_string())),
        target_name: ActiveValue::Set(Some("Newcomer".to_string())),
        details: ActiveValue::Set(None),
        created_at: ActiveValue::Set(created_at),
    }
    .insert(db)
    .await
}

/// Creates a `member_join` log event now.
pub async fn create_log_event(
    db: &DatabaseConnection,
    server_id: &str,
) -> Result<entity::log_event::Model, DbErr> {
    create_log_event_at(db, server_id, Utc::now()).await
}

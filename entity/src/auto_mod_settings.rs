use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auto_mod_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub server_id: String,
    pub spam_enabled: bool,
    /// Messages per interval
    pub spam_threshold: i32,
    /// Seconds
    pub spam_interval: i32,
    pub spam_action: String,
    pub word_filter_enabled: bool,
    pub filtered_words: Json,
    pub word_filter_action: String,
    pub raid_protection_enabled: bool,
    /// Joins per interval
    pub raid_join_threshold: i32,
    /// Seconds
    pub raid_join_interval: i32,
    pub raid_action: String,
    pub exempt_roles: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::server::Entity",
        from = "Column::ServerId",
        to = "super::server::Column::Id",
        on_delete = "Cascade"
    )]
    Server,
}

impl Related<super::server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Server.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

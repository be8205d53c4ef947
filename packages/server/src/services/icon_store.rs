use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entity::icon;

/// Append-only record of generation requests.
pub struct IconStore<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> IconStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Persist a new icon row with a fresh UUIDv7 id.
    pub async fn create(&self, user_id: i32, prompt: &str) -> Result<icon::Model, DbErr> {
        let model = icon::ActiveModel {
            id: Set(Uuid::now_v7()),
            user_id: Set(user_id),
            prompt: Set(prompt.to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        model.insert(self.conn).await
    }

    /// One page of the icons owned by `user_id`, newest first, plus the total count.
    pub async fn page_for_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<icon::Model>, u64), DbErr> {
        let select = icon::Entity::find().filter(icon::Column::UserId.eq(user_id));

        let total = select
            .clone()
            .paginate(self.conn, per_page)
            .num_items()
            .await?;

        let icons = select
            .order_by_desc(icon::Column::CreatedAt)
            .order_by_desc(icon::Column::Id)
            .offset(Some((page - 1) * per_page))
            .limit(Some(per_page))
            .all(self.conn)
            .await?;

        Ok((icons, total))
    }
}

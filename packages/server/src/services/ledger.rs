use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use tracing::{debug, instrument};

use crate::entity::user;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("credit amount must be positive, got {0}")]
    InvalidAmount(i32),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Per-user credit balance.
///
/// Every mutation is a single conditional `UPDATE`, so concurrent spends for
/// the same user cannot drive the balance below zero.
pub struct CreditLedger<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CreditLedger<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Atomically take `amount` credits from `user_id`.
    ///
    /// Returns `false` when the user does not exist or holds fewer than
    /// `amount` credits; in that case nothing changes.
    #[instrument(skip(self))]
    pub async fn try_spend(&self, user_id: i32, amount: i32) -> Result<bool, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let result = user::Entity::update_many()
            .col_expr(
                user::Column::Credits,
                Expr::col(user::Column::Credits).sub(amount),
            )
            .filter(user::Column::Id.eq(user_id))
            .filter(user::Column::Credits.gte(amount))
            .exec(self.conn)
            .await?;

        let spent = result.rows_affected == 1;
        debug!(spent, "Credit spend attempted");
        Ok(spent)
    }

    /// Current balance, or `None` for an unknown user.
    pub async fn balance(&self, user_id: i32) -> Result<Option<i32>, DbErr> {
        Ok(user::Entity::find_by_id(user_id)
            .one(self.conn)
            .await?
            .map(|u| u.credits))
    }
}

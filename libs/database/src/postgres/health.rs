use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement};

/// `SELECT 1` through the pool; fails when no connection can be checked out.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DbErr> {
    let probe = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());
    db.query_one_raw(probe).await?;
    Ok(())
}

use crate::entity::account;
use academics_core::domain::AccountId;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter,
};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::StoreResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub id: AccountId,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Login accounts. Students sign in with their email as the identifier.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn username_exists(&self, username: &str) -> StoreResult<bool>;
    async fn verify_password(&self, username: &str, password: &str) -> StoreResult<bool>;
}

#[derive(Clone)]
pub struct SeaOrmAccountRepository {
    db: DatabaseConnection,
}

impl SeaOrmAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: account::Model) -> AccountRecord {
        AccountRecord {
            id: AccountId::new(model.id),
            username: model.username,
            email: model.email,
        }
    }

    pub(crate) async fn insert<C>(conn: &C, new_account: NewAccount) -> StoreResult<AccountRecord>
    where
        C: ConnectionTrait,
    {
        let active_model = account::ActiveModel {
            username: Set(new_account.username),
            email: Set(new_account.email),
            first_name: Set(new_account.first_name),
            last_name: Set(new_account.last_name),
            password_hash: Set(hash_password(&new_account.password)),
            created_at: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };

        let model = active_model.insert(conn).await?;
        Ok(Self::map_model(model))
    }
}

#[async_trait]
impl AccountRepository for SeaOrmAccountRepository {
    async fn username_exists(&self, username: &str) -> StoreResult<bool> {
        let count = account::Entity::find()
            .filter(account::Column::Username.eq(username))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn verify_password(&self, username: &str, password: &str) -> StoreResult<bool> {
        let model = account::Entity::find()
            .filter(account::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(model.is_some_and(|model| password_matches(&model.password_hash, password)))
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// `<salt>$<hex sha-256 of salt || password>`
pub(crate) fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("{salt}${}", digest(&salt, password))
}

pub(crate) fn password_matches(stored: &str, password: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, expected)) => digest(salt, password) == expected,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{hash_password, password_matches};

    #[test]
    fn hashed_password_verifies() {
        let stored = hash_password("correct horse");

        assert!(password_matches(&stored, "correct horse"));
        assert!(!password_matches(&stored, "battery staple"));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        assert_ne!(hash_password("pw"), hash_password("pw"));
    }

    #[test]
    fn malformed_digest_never_matches() {
        assert!(!password_matches("no-separator", "pw"));
    }
}

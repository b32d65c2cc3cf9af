//! PostgreSQL implementation of ClientDirectory

use async_trait::async_trait;
use sqlx::PgPool;

use cupo::{Client, ClientDirectory, DomainError, IdType, Person};

const COUNT_CLIENTS: &str = "SELECT COUNT(*) FROM clients WHERE id_type = $1 AND id_value = $2";

const CREATE_CLIENT: &str = "INSERT INTO clients (id_type, id_value, first_name, last_name, email) \
     VALUES ($1, $2, $3, $4, $5)";

const SELECT_CLIENT: &str =
    "SELECT id, id_type, id_value, first_name, last_name, email FROM clients \
     WHERE id_type = $1 AND id_value = $2";

/// PostgreSQL implementation of ClientDirectory
pub struct PgClientDirectory {
    pool: PgPool,
}

impl PgClientDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ClientRow {
    id: i64,
    id_type: String,
    id_value: String,
    first_name: String,
    last_name: String,
    email: String,
}

impl TryFrom<ClientRow> for Client {
    type Error = DomainError;

    fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            id_type: row.id_type.parse()?,
            id_value: row.id_value,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
        })
    }
}

#[async_trait]
impl ClientDirectory for PgClientDirectory {
    async fn exists(&self, id_type: IdType, id_value: &str) -> Result<bool, DomainError> {
        let matches = sqlx::query_scalar::<_, i64>(COUNT_CLIENTS)
            .bind(id_type.as_str())
            .bind(id_value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(matches == 1)
    }

    async fn create(&self, person: &Person) -> Result<(), DomainError> {
        if self.exists(person.id_type, &person.id_value).await? {
            return Err(DomainError::already_exists(person.id_type, &person.id_value));
        }

        sqlx::query(CREATE_CLIENT)
            .bind(person.id_type.as_str())
            .bind(&person.id_value)
            .bind(&person.first_name)
            .bind(&person.last_name)
            .bind(&person.email)
            .execute(&self.pool)
            .await
            .map_err(|e| match e.as_database_error().and_then(|db| db.code()) {
                // Unique violation: a concurrent caller won the insert.
                Some(code) if code == "23505" => {
                    DomainError::already_exists(person.id_type, &person.id_value)
                }
                _ => DomainError::Repository(e.to_string()),
            })?;

        Ok(())
    }

    async fn find(
        &self,
        id_type: IdType,
        id_value: &str,
    ) -> Result<Option<Client>, DomainError> {
        let mut rows = sqlx::query_as::<_, ClientRow>(SELECT_CLIENT)
            .bind(id_type.as_str())
            .bind(id_value)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        if rows.len() > 1 {
            return Err(DomainError::ambiguous_client(id_type, id_value));
        }

        match rows.pop() {
            Some(row) => Ok(Some(row.try_into()?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_maps_to_client() {
        let row = ClientRow {
            id: 42,
            id_type: "passport".to_string(),
            id_value: "AB123456".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Gomez".to_string(),
            email: "maria@example.com".to_string(),
        };

        let client = Client::try_from(row).unwrap();
        assert_eq!(client.id, 42);
        assert_eq!(client.id_type, IdType::Passport);
        assert_eq!(client.id_value, "AB123456");
    }

    #[test]
    fn test_row_with_unknown_id_type_is_a_fault() {
        let row = ClientRow {
            id: 1,
            id_type: "cedula".to_string(),
            id_value: "99".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            email: "ana@example.com".to_string(),
        };

        assert!(Client::try_from(row).is_err());
    }
}

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::domain::error::{AppError, Result};
use crate::domain::repository::StudentRepository;
use crate::domain::student::{NewStudent, StudentOrder, StudentRecord};

pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    pub async fn init(database_url: &str) -> Result<Self> {
        if database_url.contains(":memory:") {
            return Self::in_memory().await;
        }

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to parse connection string: {}", e))
            })?
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect: {}", e)))?;

        Self::with_pool(pool).await
    }

    /// A private in-memory database. The pool is pinned to one connection
    /// because every SQLite memory connection is its own database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(|e| {
            AppError::DatabaseError(format!("Failed to parse connection string: {}", e))
        })?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect: {}", e)))?;

        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS students (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                age INTEGER NOT NULL,
                email TEXT NOT NULL,
                password TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create table: {}", e)))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    async fn insert(&self, student: &NewStudent) -> Result<StudentRecord> {
        let result = sqlx::query(
            "INSERT INTO students (name, age, email, password)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&student.name)
        .bind(student.age)
        .bind(&student.email)
        .bind(&student.password)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to insert student: {}", e)))?;

        Ok(student.clone().into_record(result.last_insert_rowid()))
    }

    async fn list_all_ordered_by(&self, order: StudentOrder) -> Result<Vec<StudentRecord>> {
        // SQLite's default BINARY collation compares names bytewise.
        let sql = match order {
            StudentOrder::Id => "SELECT id, name, age, email, password FROM students ORDER BY id",
            StudentOrder::Name => {
                "SELECT id, name, age, email, password FROM students ORDER BY name, id"
            }
        };

        sqlx::query_as::<_, StudentEntity>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to list students: {}", e)))
            .map(|entities| entities.into_iter().map(|e| e.into()).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<StudentRecord> {
        let entity = sqlx::query_as::<_, StudentEntity>(
            "SELECT id, name, age, email, password FROM students WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to get student: {}", e)))?;

        entity
            .map(StudentRecord::from)
            .ok_or_else(|| AppError::NotFound(format!("Student {} not found", id)))
    }

    async fn update(&self, id: i64, student: &NewStudent) -> Result<StudentRecord> {
        let result = sqlx::query(
            "UPDATE students SET name = ?, age = ?, email = ?, password = ?
             WHERE id = ?",
        )
        .bind(&student.name)
        .bind(student.age)
        .bind(&student.email)
        .bind(&student.password)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to update student: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Student {} not found", id)));
        }

        Ok(student.clone().into_record(id))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to delete student: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Student {} not found", id)));
        }

        Ok(())
    }
}

// Internal entity for database mapping
#[derive(sqlx::FromRow)]
struct StudentEntity {
    id: i64,
    name: String,
    age: i64,
    email: String,
    password: String,
}

impl From<StudentEntity> for StudentRecord {
    fn from(e: StudentEntity) -> Self {
        Self {
            id: e.id,
            name: e.name,
            age: e.age,
            email: e.email,
            password: e.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = SqliteStudentRepository::in_memory().await.unwrap();

        let first = repo
            .insert(&NewStudent::new("Alice", 20, "a@x.com", "p1"))
            .await
            .unwrap();
        let second = repo
            .insert(&NewStudent::new("Alice", 20, "a@x.com", "p1"))
            .await
            .unwrap();

        assert_eq!(first.id + 1, second.id);
        assert_eq!(second.password, "p1");
    }

    #[tokio::test]
    async fn test_list_by_name_is_bytewise_with_id_tiebreak() {
        let repo = SqliteStudentRepository::in_memory().await.unwrap();
        for (name, age) in [("bob", 1), ("Carol", 2), ("Bob", 3), ("Carol", 4)] {
            repo.insert(&NewStudent::new(name, age, "x@x.com", "pw"))
                .await
                .unwrap();
        }

        let listed = repo.list_all_ordered_by(StudentOrder::Name).await.unwrap();
        let seen: Vec<(&str, i64)> = listed.iter().map(|s| (s.name.as_str(), s.age)).collect();
        assert_eq!(seen, vec![("Bob", 3), ("Carol", 2), ("Carol", 4), ("bob", 1)]);
    }

    #[tokio::test]
    async fn test_list_by_id_is_insertion_order() {
        let repo = SqliteStudentRepository::in_memory().await.unwrap();
        for name in ["Zed", "Amy"] {
            repo.insert(&NewStudent::new(name, 18, "x@x.com", "pw"))
                .await
                .unwrap();
        }

        let listed = repo.list_all_ordered_by(StudentOrder::Id).await.unwrap();
        assert_eq!(listed[0].name, "Zed");
        assert_eq!(listed[1].name, "Amy");
    }

    #[tokio::test]
    async fn test_file_database_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("rollbook.db");
        let url = format!("sqlite://{}", db_path.display());

        let repo = SqliteStudentRepository::init(&url).await.unwrap();
        repo.insert(&NewStudent::new("Alice", 20, "a@x.com", "p1"))
            .await
            .unwrap();

        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_memory_url_uses_private_database() {
        let repo = SqliteStudentRepository::init("sqlite::memory:").await.unwrap();
        repo.insert(&NewStudent::new("Alice", 20, "a@x.com", "p1"))
            .await
            .unwrap();

        let listed = repo.list_all_ordered_by(StudentOrder::Id).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_get_update_delete_by_id() {
        let repo = SqliteStudentRepository::in_memory().await.unwrap();
        let alice = repo
            .insert(&NewStudent::new("Alice", 20, "a@x.com", "p1"))
            .await
            .unwrap();

        assert_eq!(repo.get_by_id(alice.id).await.unwrap(), alice);

        let updated = repo
            .update(alice.id, &NewStudent::new("Alicia", 21, "al@x.com", "p9"))
            .await
            .unwrap();
        assert_eq!(updated.id, alice.id);
        assert_eq!(repo.get_by_id(alice.id).await.unwrap(), updated);

        repo.delete(alice.id).await.unwrap();
        assert!(repo
            .list_all_ordered_by(StudentOrder::Id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let repo = SqliteStudentRepository::in_memory().await.unwrap();
        let student = NewStudent::new("Ghost", 30, "g@x.com", "pw");

        assert!(matches!(repo.get_by_id(42).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            repo.update(42, &student).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(repo.delete(42).await, Err(AppError::NotFound(_))));
    }
}

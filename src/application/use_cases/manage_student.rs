// ============================================================
// STUDENT RECORD USE CASE
// ============================================================
// Single-record reads and edits by id. The CSV bridge never calls these.

use std::sync::Arc;

use tracing::info;

use crate::domain::error::Result;
use crate::domain::repository::StudentRepository;
use crate::domain::student::{NewStudent, StudentRecord};

pub struct ManageStudentUseCase {
    repository: Arc<dyn StudentRepository>,
}

impl ManageStudentUseCase {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: i64) -> Result<StudentRecord> {
        self.repository.get_by_id(id).await
    }

    /// Replace every field of record `id`; the id itself is kept.
    pub async fn update(&self, id: i64, student: &NewStudent) -> Result<StudentRecord> {
        let record = self.repository.update(id, student).await?;
        info!(id, name = %record.name, "Updated student");
        Ok(record)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await?;
        info!(id, "Deleted student");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use crate::domain::student::StudentOrder;
    use crate::infrastructure::db::SqliteStudentRepository;

    #[tokio::test]
    async fn test_update_then_delete() {
        let repo = Arc::new(SqliteStudentRepository::in_memory().await.unwrap());
        let bob = repo
            .insert(&NewStudent::new("Bob", 19, "b@x.com", "p2"))
            .await
            .unwrap();
        let use_case = ManageStudentUseCase::new(repo.clone());

        let updated = use_case
            .update(bob.id, &NewStudent::new("Robert", 20, "r@x.com", "p2"))
            .await
            .unwrap();
        assert_eq!(use_case.get(bob.id).await.unwrap(), updated);

        use_case.delete(bob.id).await.unwrap();
        assert!(matches!(
            use_case.get(bob.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(repo
            .list_all_ordered_by(StudentOrder::Id)
            .await
            .unwrap()
            .is_empty());
    }
}

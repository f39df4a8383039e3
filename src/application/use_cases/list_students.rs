use std::sync::Arc;

use crate::domain::error::Result;
use crate::domain::repository::StudentRepository;
use crate::domain::student::{StudentOrder, StudentRecord};

pub struct ListStudentsUseCase {
    repository: Arc<dyn StudentRepository>,
}

impl ListStudentsUseCase {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, order: StudentOrder) -> Result<Vec<StudentRecord>> {
        self.repository.list_all_ordered_by(order).await
    }
}

use async_trait::async_trait;

use crate::domain::error::Result;
use crate::domain::student::{NewStudent, StudentOrder, StudentRecord};

/// Narrow persistence seam for student records.
///
/// Each write is its own commit; callers get no transaction spanning
/// several inserts. `get_by_id`, `update` and `delete` return `NotFound`
/// when no record has the given id.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn insert(&self, student: &NewStudent) -> Result<StudentRecord>;
    async fn list_all_ordered_by(&self, order: StudentOrder) -> Result<Vec<StudentRecord>>;
    async fn get_by_id(&self, id: i64) -> Result<StudentRecord>;
    async fn update(&self, id: i64, student: &NewStudent) -> Result<StudentRecord>;
    async fn delete(&self, id: i64) -> Result<()>;
}

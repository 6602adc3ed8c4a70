use axum::Json;
use axum::extract::{Path, State};
use http::StatusCode;

use super::error::StudentError;
use super::extract::JsonBody;
use super::registry::{SharedRegistry, parse_id};
use super::types::{ErrorBody, Student, StudentDraft, StudentEnvelope};

// GET /students
pub async fn list_students(State(registry): State<SharedRegistry>) -> Json<Vec<Student>> {
    let registry = registry.read().await;
    Json(registry.list().to_vec())
}

// GET /students/{id}
pub async fn get_student(
    State(registry): State<SharedRegistry>,
    Path(raw_id): Path<String>,
) -> Result<Json<Student>, StudentError> {
    let id = parse_id(&raw_id).inspect_err(|e| log_rejection(&raw_id, e))?;

    let registry = registry.read().await;
    let student = registry.get(id).inspect_err(|e| log_rejection(&raw_id, e))?;
    Ok(Json(student.clone()))
}

// POST /students
pub async fn create_student(
    State(registry): State<SharedRegistry>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<StudentEnvelope>), StudentError> {
    // 先校验，再获取写锁
    let draft = StudentDraft::from_value(&body)
        .inspect_err(|e| tracing::warn!(error = %e, "Rejected student creation"))?;

    let student = registry.write().await.create(draft);
    Ok((
        StatusCode::CREATED,
        Json(StudentEnvelope::new("Student created", student)),
    ))
}

// PUT /students/{id}
pub async fn update_student(
    State(registry): State<SharedRegistry>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<StudentEnvelope>, StudentError> {
    let id = parse_id(&raw_id).inspect_err(|e| log_rejection(&raw_id, e))?;

    // 请求体已在提取时解析；校验顺序: ID 格式 -> 记录存在 -> 字段
    let mut registry = registry.write().await;
    if !registry.contains(id) {
        log_rejection(&raw_id, &StudentError::NotFound);
        return Err(StudentError::NotFound);
    }

    let draft = StudentDraft::from_value(&body).inspect_err(|e| log_rejection(&raw_id, e))?;
    let student = registry.update(id, draft)?;
    Ok(Json(StudentEnvelope::new(
        "Student updated successfully",
        student,
    )))
}

// DELETE /students/{id}
pub async fn delete_student(
    State(registry): State<SharedRegistry>,
    Path(raw_id): Path<String>,
) -> Result<Json<StudentEnvelope>, StudentError> {
    let id = parse_id(&raw_id).inspect_err(|e| log_rejection(&raw_id, e))?;

    let removed = registry
        .write()
        .await
        .delete(id)
        .inspect_err(|e| log_rejection(&raw_id, e))?;
    Ok(Json(StudentEnvelope::new(
        "Student deleted successfully",
        removed,
    )))
}

pub async fn route_not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Route not found".to_string(),
        }),
    )
}

fn log_rejection(raw_id: &str, error: &StudentError) {
    tracing::warn!(raw_id = %raw_id, kind = ?error.kind(), error = %error, "Rejected student request");
}

use std::sync::Arc;

use serde_json::Number;
use tokio::sync::RwLock;

use super::error::StudentError;
use super::types::{Student, StudentDraft, StudentId};

// 跨请求共享的注册表
pub type SharedRegistry = Arc<RwLock<StudentRegistry>>;

/// 内存中的学生注册表
///
/// 保持插入顺序；`next_id` 只增不减，删除后的 ID 不会被重新分配。
#[derive(Debug, Clone)]
pub struct StudentRegistry {
    students: Vec<Student>,
    next_id: StudentId,
}

impl Default for StudentRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

impl StudentRegistry {
    /// 空注册表，ID 从 1 开始
    pub fn empty() -> Self {
        Self {
            students: Vec::new(),
            next_id: 1,
        }
    }

    /// 带初始数据的注册表（Alice、Bob）
    pub fn seeded() -> Self {
        let students = vec![
            Student {
                id: 1,
                name: "Alice".to_string(),
                age: Number::from(20),
                dept: "IT".to_string(),
            },
            Student {
                id: 2,
                name: "Bob".to_string(),
                age: Number::from(22),
                dept: "HR".to_string(),
            },
        ];
        Self::with_students(students)
    }

    /// 使用给定记录构建，`next_id` 取最大 ID 加一
    pub fn with_students(students: Vec<Student>) -> Self {
        let next_id = students.iter().map(|s| s.id).max().map_or(1, |max| max + 1);
        Self { students, next_id }
    }

    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    pub fn list(&self) -> &[Student] {
        &self.students
    }

    pub fn get(&self, id: StudentId) -> Result<&Student, StudentError> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .ok_or(StudentError::NotFound)
    }

    pub fn create(&mut self, draft: StudentDraft) -> Student {
        let id = self.next_id;
        self.next_id += 1;

        let student = draft.into_student(id);
        self.students.push(student.clone());

        tracing::info!(student_id = id, name = %student.name, "Created student");
        student
    }

    pub fn update(&mut self, id: StudentId, draft: StudentDraft) -> Result<Student, StudentError> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StudentError::NotFound)?;

        student.name = draft.name;
        student.age = draft.age;
        student.dept = draft.dept;

        tracing::info!(student_id = id, "Updated student");
        Ok(student.clone())
    }

    pub fn delete(&mut self, id: StudentId) -> Result<Student, StudentError> {
        let index = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or(StudentError::NotFound)?;

        let removed = self.students.remove(index);
        tracing::info!(student_id = id, "Deleted student");
        Ok(removed)
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.students.iter().any(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn next_id(&self) -> StudentId {
        self.next_id
    }
}

/// 解析路径中的 ID
///
/// 与 JavaScript `Number()` 的字符串转换一致：支持十进制、`0x`/`0o`/`0b` 整数和 `Infinity`。
/// 非数字返回 `InvalidId`；合法数字但不可能匹配任何记录（负数、小数、无穷、超出范围）返回
/// `NotFound`。空白段按 0 处理。
pub fn parse_id(raw: &str) -> Result<StudentId, StudentError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    if let Some(result) = parse_radix_literal(trimmed) {
        return result;
    }

    if matches!(trimmed, "Infinity" | "+Infinity" | "-Infinity") {
        return Err(StudentError::NotFound);
    }

    // f64 解析还接受 inf/nan，这里只放行十进制字符
    let is_decimal = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !is_decimal {
        return Err(StudentError::InvalidId);
    }

    let value: f64 = trimmed.parse().map_err(|_| StudentError::InvalidId)?;

    // 2^64
    if value < 0.0 || value.fract() != 0.0 || value >= 18_446_744_073_709_551_616.0 {
        return Err(StudentError::NotFound);
    }

    Ok(value as StudentId)
}

// 0x/0o/0b 前缀的整数，不带符号
fn parse_radix_literal(literal: &str) -> Option<Result<StudentId, StudentError>> {
    let radix = match literal.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &literal[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(Err(StudentError::InvalidId));
    }

    // 只可能是溢出
    Some(StudentId::from_str_radix(digits, radix).map_err(|_| StudentError::NotFound))
}

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::error::StudentError;

/// 学生 ID，由注册表分配，创建后不可变
pub type StudentId = u64;

/// 学生记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// 不做范围校验；整数值的浮点数按整数保存
    pub age: Number,
    pub dept: String,
}

/// 经过校验的创建/更新命令
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDraft {
    pub name: String,
    pub age: Number,
    pub dept: String,
}

impl StudentDraft {
    /// 校验请求体字段
    pub fn from_value(value: &Value) -> Result<Self, StudentError> {
        let name = non_empty_string(value.get("name")).ok_or(StudentError::InvalidFields)?;
        let age = match value.get("age") {
            Some(Value::Number(age)) => normalize_number(age),
            _ => return Err(StudentError::InvalidFields),
        };
        let dept = non_empty_string(value.get("dept")).ok_or(StudentError::InvalidFields)?;

        Ok(Self { name, age, dept })
    }

    pub(crate) fn into_student(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            age: self.age,
            dept: self.dept,
        }
    }
}

// 整数值的浮点数（如 21.0）按整数输出
fn normalize_number(number: &Number) -> Number {
    match number.as_f64() {
        Some(value)
            if number.is_f64()
                && value.fract() == 0.0
                && value >= i64::MIN as f64
                && value < i64::MAX as f64 =>
        {
            Number::from(value as i64)
        }
        _ => number.clone(),
    }
}

fn non_empty_string(field: Option<&Value>) -> Option<String> {
    match field {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}

/// 变更操作的响应体: `{message, student}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentEnvelope {
    pub message: String,
    pub student: Student,
}

impl StudentEnvelope {
    pub fn new(message: impl Into<String>, student: Student) -> Self {
        Self {
            message: message.into(),
            student,
        }
    }
}

/// 错误响应体: `{error}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::EngineError;
use crate::infra::persistence::StorageError;

/// Стабильный код ошибки для клиента (UI сверяется с ним, а не с текстом).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Битый JSON или неизвестная команда.
    BadRequest,
    IllegalAction,
    InvalidAmount,
    OutOfTurn,
    InsufficientPlayers,
    TooManyPlayers,
    InvalidSeat,
    NothingToUndo,
    GameOver,
    /// Ошибка хранилища (на состояние движка не влияет).
    Storage,
}

/// Ошибка внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let code = match &err {
            EngineError::IllegalAction(_) => ErrorCode::IllegalAction,
            EngineError::InvalidAmount(_) => ErrorCode::InvalidAmount,
            EngineError::OutOfTurn { .. } => ErrorCode::OutOfTurn,
            EngineError::InsufficientPlayers(_) => ErrorCode::InsufficientPlayers,
            EngineError::TooManyPlayers(_) => ErrorCode::TooManyPlayers,
            EngineError::InvalidSeat(_) => ErrorCode::InvalidSeat,
            EngineError::NothingToUndo => ErrorCode::NothingToUndo,
            EngineError::GameOver => ErrorCode::GameOver,
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::new(ErrorCode::Storage, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

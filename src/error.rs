use std::path::PathBuf;
use thiserror::Error;

/// Failures at the boundary between the task list and its backing file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read tasks file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Tasks file contains invalid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Invalid tasks file format in {}: expected a list", .0.display())]
    NotASequence(PathBuf),

    #[error("Failed to serialize tasks: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write tasks file: {0}")]
    Write(#[source] std::io::Error),
}

/// Rejected user input. Nothing is mutated when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Task title cannot be empty.")]
    EmptyTitle,

    #[error("Invalid task number. Please enter a number.")]
    InvalidNumber(String),
}

use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open `path` in the requested editor, falling back to $EDITOR/$VISUAL
    /// (or nano/notepad). Returns the editor that succeeded.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<String> {
        let fallback = Self::default_editor();
        let first = editor.clone().unwrap_or_else(|| fallback.clone());

        match Command::new(&first).arg(path).status() {
            Ok(s) if s.success() => return Ok(first),
            _ if first == fallback => {
                return Err(AppError::Config(format!("editor '{}' failed", first)));
            }
            _ => {
                tracing::warn!(editor = %first, fallback = %fallback, "editor not available");
            }
        }

        match Command::new(&fallback).arg(path).status() {
            Ok(s) if s.success() => Ok(fallback),
            Ok(_) | Err(_) => Err(AppError::Config(format!(
                "failed to edit configuration file using fallback '{}'",
                fallback
            ))),
        }
    }
}

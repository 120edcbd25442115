//! Visualization assets
//!
//! The confusion matrix is a static diagnostic image produced during model
//! evaluation. This module only locates it; rendering is the caller's
//! concern. A missing image is warning-grade and never blocks anything else.

use crate::error::InferenceError;
use std::fs;
use std::path::{Path, PathBuf};

/// Default confusion matrix image file name
pub const DEFAULT_IMAGE_FILE: &str = "cnf.png";

/// Located confusion matrix asset
#[derive(Debug, Clone)]
pub struct ConfusionMatrix {
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl ConfusionMatrix {
    /// Locate the image file, reporting [`InferenceError::ImageNotFound`]
    /// with the path when absent.
    pub fn locate(path: &Path) -> Result<Self, InferenceError> {
        if !path.is_file() {
            return Err(InferenceError::ImageNotFound {
                path: path.to_path_buf(),
            });
        }
        let size_bytes = fs::metadata(path)?.len();
        Ok(Self {
            path: path.to_path_buf(),
            size_bytes,
        })
    }
}

use crate::utils::file::FileMeta;

pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub fn is_allowed_mime(mime: &str) -> bool {
    let mime = mime.trim().to_ascii_lowercase();
    match mime.split_once('/') {
        Some(("image" | "video", subtype)) => !subtype.trim().is_empty(),
        Some(("application", "pdf")) => true,
        _ => false,
    }
}

pub fn validate_file(meta: &FileMeta) -> Result<(), String> {
    if meta.size > MAX_UPLOAD_BYTES {
        return Err(format!(
            "'{}' is larger than the 10 MB upload limit",
            meta.name
        ));
    }
    if !is_allowed_mime(&meta.mime_type) {
        return Err("Only images, videos and PDF documents can be uploaded".into());
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadFormState {
    pub title: String,
    pub description: String,
}

impl UploadFormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn description(&self) -> Option<String> {
        let trimmed = self.description.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn validate(&self, service_id: Option<&str>, file: Option<&FileMeta>) -> Result<(), String> {
        if service_id.map(str::trim).unwrap_or_default().is_empty() {
            return Err("Select a service first".into());
        }
        if self.title.trim().is_empty() {
            return Err("Title is required".into());
        }
        let file = file.ok_or("Choose a file to upload")?;
        validate_file(file)
    }
}

/// Human readable size such as `2.5 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f >= KB * KB {
        format!("{:.1} MB", bytes_f / (KB * KB))
    } else if bytes_f >= KB {
        format!("{:.1} KB", bytes_f / KB)
    } else {
        format!("{bytes} B")
    }
}

use crate::api::{ApiError, UploadFile};

/// What the upload form needs to know about a picked file before reading it.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl FileMeta {
    pub fn from_file(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size().max(0.0) as u64,
            mime_type: file_mime_type(file),
        }
    }
}

pub fn file_mime_type(file: &web_sys::File) -> String {
    let mime = file.type_();
    if mime.trim().is_empty() {
        "application/octet-stream".to_string()
    } else {
        mime
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn read_upload_file(file: &web_sys::File) -> Result<UploadFile, ApiError> {
    use wasm_bindgen_futures::JsFuture;

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::unknown("Failed to read the selected file"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(UploadFile {
        name: file.name(),
        mime_type: file_mime_type(file),
        bytes,
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn read_upload_file(_file: &web_sys::File) -> Result<UploadFile, ApiError> {
    Err(ApiError::unknown("File reading is only available in the browser"))
}

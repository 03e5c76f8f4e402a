use reqwest::multipart::{Form, Part};
use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::dto::UploadImageResponseDto;
use crate::api::error::ApiError;
use crate::config::SecureString;

/// Multipart field name the upload endpoint expects.
const UPLOAD_FIELD: &str = "flashcard";

impl ApiClient {
    /// Upload an image and return its public URL.
    pub async fn upload_image(
        &self,
        token: &SecureString,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadImageResponseDto, ApiError> {
        if bytes.is_empty() {
            return Err(ApiError::InvalidRequest("image is empty".to_string()));
        }

        let mime = mime_for(file_name);
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|e| ApiError::InvalidRequest(format!("bad mime type '{}': {}", mime, e)))?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        self.call(Method::POST, "/upload")
            .bearer(token)
            .multipart(form)
            .send()
            .await
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".webp") {
        "image/webp"
    } else {
        "image/jpeg"
    }
}

#[cfg(test)]
mod tests {
    use super::mime_for;

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for("card.PNG"), "image/png");
        assert_eq!(mime_for("card.webp"), "image/webp");
        assert_eq!(mime_for("card.jpg"), "image/jpeg");
        assert_eq!(mime_for("card"), "image/jpeg");
    }
}

use actix_multipart::Multipart;
use futures::TryStreamExt;

/// Fields of the resume upload forms: the PDF under "resume" and, for the
/// analysis route, the target role under "jobRole".
#[derive(Debug, Default)]
pub struct ResumeUpload {
    pub resume: Option<Vec<u8>>,
    pub job_role: Option<String>,
}

const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

/// Drains a multipart payload into memory. Unknown fields are skipped.
pub async fn read_resume_upload(mut payload: Multipart) -> Result<ResumeUpload, String> {
    let mut upload = ResumeUpload::default();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| format!("Invalid multipart payload: {}", e))?
    {
        let name = field.name().unwrap_or("").to_string();

        let mut data = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| format!("Failed to read upload: {}", e))?
        {
            if data.len() + chunk.len() > MAX_RESUME_BYTES {
                return Err("Resume file is too large (max 10 MB)".to_string());
            }
            data.extend_from_slice(&chunk);
        }

        match name.as_str() {
            "resume" => upload.resume = Some(data),
            "jobRole" => {
                upload.job_role = Some(
                    String::from_utf8(data)
                        .map_err(|_| "jobRole must be UTF-8 text".to_string())?
                        .trim()
                        .to_string(),
                );
            }
            _ => {}
        }
    }

    Ok(upload)
}

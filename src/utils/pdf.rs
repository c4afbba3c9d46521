/// Pulls the plain text out of an uploaded PDF. Runs in-memory; the file is
/// never written to disk.
pub fn extract_text(bytes: &[u8]) -> Result<String, String> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| format!("Failed to read PDF: {}", e))?;

    if text.trim().is_empty() {
        return Err("The PDF contains no extractable text".to_string());
    }

    Ok(text)
}

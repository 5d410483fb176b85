/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Build a unique object-storage name for an uploaded photo.
///
/// Names derive from the current time and keep the original extension
/// (lowercased, leading dot stripped): `celula_{millis}.{ext}`. An empty
/// extension falls back to `jpg`.
pub fn storage_object_name(extension: &str) -> String {
    let ext = extension.trim_start_matches('.').to_lowercase();
    let ext = if ext.is_empty() { "jpg".to_string() } else { ext };
    format!("celula_{}.{ext}", now_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_object_name_keeps_extension() {
        let name = storage_object_name("png");
        assert!(name.starts_with("celula_"));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn test_storage_object_name_normalizes() {
        assert!(storage_object_name(".JPEG").ends_with(".jpeg"));
        assert!(storage_object_name("").ends_with(".jpg"));
    }

    #[test]
    fn test_storage_object_name_is_time_ordered() {
        let a = storage_object_name("jpg");
        let b = storage_object_name("jpg");
        // Same-millisecond collisions are possible here; only ordering of the
        // embedded timestamp is asserted.
        assert!(a <= b);
    }
}

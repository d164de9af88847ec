use std::sync::Arc;

/// The image the user picked for extraction. Replaced wholesale on
/// re-selection, never merged. Bytes are shared so cloning the selection
/// into a request task stays cheap.
#[derive(Clone)]
pub struct SelectedImage {
    pub file_name: String,
    pub bytes: Arc<Vec<u8>>,
}

impl SelectedImage {
    pub fn new(file_name: String, bytes: Vec<u8>) -> Self {
        Self {
            file_name,
            bytes: Arc::new(bytes),
        }
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

impl std::fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SelectedImage({}, {} bytes)",
            self.file_name,
            self.bytes.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_file_name_and_bytes() {
        let image = SelectedImage::new("receipt.png".to_string(), vec![1, 2, 3]);

        assert_eq!(image.file_name, "receipt.png");
        assert_eq!(image.byte_len(), 3);
    }

    #[test]
    fn test_clone_shares_the_byte_buffer() {
        let image = SelectedImage::new("scan.jpg".to_string(), vec![0u8; 1024]);
        let cloned = image.clone();

        assert!(Arc::ptr_eq(&image.bytes, &cloned.bytes));
    }

    #[test]
    fn test_debug_does_not_dump_the_buffer() {
        let image = SelectedImage::new("page.png".to_string(), vec![0u8; 64]);

        assert_eq!(format!("{:?}", image), "SelectedImage(page.png, 64 bytes)");
    }
}

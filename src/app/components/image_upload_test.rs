use super::*;

#[test]
fn check_image_accepts_images_up_to_limit() {
    assert_eq!(check_image("image/png", 1024.0), Ok(()));
    assert_eq!(check_image("image/webp", MAX_IMAGE_BYTES), Ok(()));
}

#[test]
fn check_image_rejects_other_types() {
    assert_eq!(check_image("application/pdf", 10.0), Err("Please upload an image file"));
    assert_eq!(check_image("", 10.0), Err("Please upload an image file"));
}

#[test]
fn check_image_rejects_large_files() {
    assert_eq!(
        check_image("image/jpeg", MAX_IMAGE_BYTES + 1.0),
        Err("Image size should be less than 5MB")
    );
}

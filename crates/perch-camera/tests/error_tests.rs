use perch_camera::CameraError;
use std::io;

#[test]
fn test_from_io_error() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "no such device");
    let cam_err: CameraError = io_err.into();

    match cam_err {
        CameraError::Device(msg) => assert!(msg.contains("no such device")),
        other => panic!("expected Device variant, got {other:?}"),
    }
}

#[test]
fn test_display_includes_context() {
    assert!(
        CameraError::Stream("dequeue failed".to_string())
            .to_string()
            .contains("dequeue failed")
    );
    assert!(
        CameraError::Decode("bad jpeg".to_string())
            .to_string()
            .contains("bad jpeg")
    );
    assert!(
        CameraError::Channel("closed".to_string())
            .to_string()
            .contains("closed")
    );
}

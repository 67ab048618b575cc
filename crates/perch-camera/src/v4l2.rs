use crate::{Camera, CameraConfig, CameraError};
use image::ImageFormat;
use perch_base::Tensor;
use std::thread::{self, JoinHandle};
use tokio::sync::mpsc;
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

type FrameResult = Result<Tensor<u8>, CameraError>;

/// V4L2 webcam backend.
///
/// Capture runs on a dedicated OS thread (V4L2 reads block) and frames are
/// handed to async consumers over a bounded channel. Dropping the camera
/// closes the channel, which stops the thread; `Drop` joins it.
pub struct V4l2Camera {
    config: CameraConfig,
    device: Option<Device>,
    receiver: Option<mpsc::Receiver<FrameResult>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("config", &self.config)
            .field("running", &self.receiver.is_some())
            .finish()
    }
}

impl Camera for V4l2Camera {
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError> {
        self.ensure_started()?;

        let receiver = self
            .receiver
            .as_mut()
            .ok_or_else(|| CameraError::Channel("receiver not initialized".to_string()))?;

        receiver
            .recv()
            .await
            .ok_or_else(|| CameraError::Channel("capture thread stopped".to_string()))?
    }
}

impl Drop for V4l2Camera {
    fn drop(&mut self) {
        // Closing the receiver makes the capture thread's next send fail,
        // which exits its loop.
        drop(self.receiver.take());
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl V4l2Camera {
    /// Open the device and negotiate MJPEG at the requested resolution
    /// and frame rate. Capture does not start until the first `recv`.
    ///
    /// # Errors
    ///
    /// `CameraError::Device` if the device cannot be opened, refuses
    /// MJPEG, or rejects the format/rate parameters.
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        let device = Device::with_path(config.device())?;

        let requested = Format::new(config.width(), config.height(), FourCC::new(b"MJPG"));
        let accepted = Capture::set_format(&device, &requested)?;
        if accepted.fourcc != FourCC::new(b"MJPG") {
            return Err(CameraError::Device(format!(
                "{} does not support MJPEG capture",
                config.device()
            )));
        }

        let params = v4l::video::capture::Parameters::with_fps(config.fps());
        Capture::set_params(&device, &params)?;

        log::info!(
            "opened {} at {}x{} {}fps",
            config.device(),
            accepted.width,
            accepted.height,
            config.fps()
        );

        Ok(Self {
            config,
            device: Some(device),
            receiver: None,
            thread_handle: None,
        })
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Start the capture thread on first use.
    fn ensure_started(&mut self) -> Result<(), CameraError> {
        if self.receiver.is_some() {
            return Ok(());
        }

        let device = self
            .device
            .take()
            .ok_or_else(|| CameraError::Device("device already consumed".to_string()))?;

        let buffer_count = self.config.buffer_count();
        let (tx, rx) = mpsc::channel(buffer_count as usize);

        let handle = thread::spawn(move || {
            if let Err(e) = capture_loop(device, tx, buffer_count) {
                log::warn!("capture thread exited with error: {e}");
            }
        });

        self.receiver = Some(rx);
        self.thread_handle = Some(handle);
        Ok(())
    }
}

/// Blocking capture loop: read MJPEG frames, decode to RGB tensors, push
/// them through the channel until the receiver goes away.
fn capture_loop(
    device: Device,
    tx: mpsc::Sender<FrameResult>,
    buffer_count: u32,
) -> Result<(), CameraError> {
    let mut stream = MmapStream::with_buffers(&device, Type::VideoCapture, buffer_count)?;

    loop {
        let (data, _meta) = CaptureStream::next(&mut stream)?;

        // An empty buffer is a dropped frame; skip it rather than fail.
        if data.is_empty() {
            log::debug!("empty camera frame, skipping");
            continue;
        }

        // The mmap buffer is only valid until the next dequeue, so decode
        // before advancing the stream.
        let frame = decode_mjpeg(data);

        if tx.blocking_send(frame).is_err() {
            // Receiver dropped, camera is shutting down.
            break;
        }
    }

    Ok(())
}

fn decode_mjpeg(data: &[u8]) -> FrameResult {
    let rgb = image::load_from_memory_with_format(data, ImageFormat::Jpeg)?.to_rgb8();
    let (width, height) = rgb.dimensions();

    Tensor::new(
        vec![height as usize, width as usize, 3],
        rgb.into_raw(),
    )
    .map_err(|e| CameraError::Decode(e.to_string()))
}

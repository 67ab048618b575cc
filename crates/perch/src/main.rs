mod config;
mod driver;
mod error;
mod overlay;

use config::AppConfig;
use error::AppError;

use log::Level;
use minifb::{Key, Window, WindowOptions};
use perch_base::logging::init_stdout_logger;
use perch_camera::{Camera, CameraConfig, V4l2Camera};
use perch_infer::{Device, ModelSource, OnnxBackend, PoseEstimator};
use perch_posture::PostureClassifier;
use std::env;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    init_stdout_logger(Level::Info);

    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "perch.toml".to_string());
    let config = AppConfig::load_or_default(&config_path)?;

    log::info!(
        "starting: camera {} {}x{}, model {}, threshold {}°",
        config.camera_device,
        config.camera_width,
        config.camera_height,
        config.model_path,
        config.threshold_degrees
    );

    let camera_config = CameraConfig::default()
        .with_device(config.camera_device.clone())
        .with_width(config.camera_width)
        .with_height(config.camera_height)
        .with_fps(config.camera_fps);
    let mut camera = V4l2Camera::new(camera_config)?;

    let backend = OnnxBackend::new(Device::Cpu);
    let mut estimator =
        PoseEstimator::new(ModelSource::File(config.model_path.clone().into()), &backend)?
            .with_conf_threshold(config.detection_confidence);
    let classifier = PostureClassifier::new().with_threshold(config.threshold_degrees);

    if config.display {
        run_windowed(&config, &mut camera, &mut estimator, &classifier).await?;
    } else {
        run_headless(&config, &mut camera, &mut estimator, &classifier).await?;
    }

    log::info!("shutting down");
    // Dropping the camera joins its capture thread; dropping the estimator
    // releases the model session.
    Ok(())
}

async fn run_windowed(
    config: &AppConfig,
    camera: &mut impl Camera,
    estimator: &mut PoseEstimator,
    classifier: &PostureClassifier,
) -> Result<(), AppError> {
    let width = config.camera_width as usize;
    let height = config.camera_height as usize;

    let mut window = Window::new(
        "perch - ESC to exit",
        width,
        height,
        WindowOptions::default(),
    )?;
    window.set_target_fps(config.camera_fps as usize);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let Some(mut frame) = driver::next_frame(camera).await? else {
            continue;
        };
        // The window buffer is fixed-size, so the frame must match it
        // exactly, not just be a valid RGB tensor.
        if frame.shape != [height, width, 3] {
            log::warn!("frame {:?} does not match window {width}x{height}, skipping", frame.shape);
            continue;
        }

        let people = estimator.detect(&frame)?;
        if let Some(outcome) = driver::evaluate(
            &people,
            config.camera_width,
            config.camera_height,
            config.min_landmark_confidence,
            classifier,
        ) {
            log::debug!(
                "posture {:?}, hip angle {:.1}°",
                outcome.label,
                outcome.angle_degrees
            );
            overlay::annotate(&mut frame, &outcome);
        }

        let argb = overlay::rgb_to_argb(&frame.data, width, height);
        window.update_with_buffer(&argb, width, height)?;
    }

    Ok(())
}

async fn run_headless(
    config: &AppConfig,
    camera: &mut impl Camera,
    estimator: &mut PoseEstimator,
    classifier: &PostureClassifier,
) -> Result<(), AppError> {
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                log::info!("interrupt received");
                return Ok(());
            }
            frame = driver::next_frame(camera) => {
                let Some(frame) = frame? else {
                    continue;
                };
                let people = estimator.detect(&frame)?;
                match driver::evaluate(
                    &people,
                    frame.shape[1] as u32,
                    frame.shape[0] as u32,
                    config.min_landmark_confidence,
                    classifier,
                ) {
                    Some(outcome) => log::info!(
                        "posture {:?}, hip angle {:.1}°",
                        outcome.label,
                        outcome.angle_degrees
                    ),
                    None => log::debug!("no posture reading this frame"),
                }
            }
        }
    }
}

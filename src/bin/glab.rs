use glab::{
    engine::{Controls, InputEvent, InputQueue, Key, RenderContext},
    gfx::Camera,
    util::BoxedError,
};

use log::{info, LevelFilter};
use std::time::Duration;

/// The replay runs at a fixed 60Hz.
const FRAME_TIME: Duration = Duration::from_nanos(16_666_667);

const DEFAULT_SCRIPT: &str = "wwdqp";

/// Replays a key script through the render-loop context without opening a window, one key per
/// frame, logging the `Projection * View * Model` matrix the shader would receive.
fn main() -> Result<(), BoxedError> {
    env_logger::builder()
        .filter_level(LevelFilter::Error)
        .filter_module("glab", LevelFilter::Debug)
        .init();

    let script = std::env::args().nth(1);
    let keys = Key::parse_script(script.as_deref().unwrap_or(DEFAULT_SCRIPT))?;

    let mut camera = Camera::default();
    camera.set_position((0.0, 0.0, 2.0).into());

    let mut context = RenderContext::new(camera, Controls::default());
    let mut queue = InputQueue::default();
    queue.push(InputEvent::Resized {
        width: 800,
        height: 600,
    });

    for (frame, key) in keys.into_iter().enumerate() {
        queue.push(InputEvent::pressed(key));
        context.drain(&mut queue);
        if context.close_requested() {
            info!("Close requested on frame {}", frame);
            break;
        }

        context.advance(FRAME_TIME.as_secs_f32());
        let pvm = context.pvm();
        info!(
            "frame {} ({:?}, eye {:?}): u_PVM = {:?}",
            frame,
            context.camera().mode(),
            context.camera().position().0,
            pvm.transpose().0.iter().map(|row| row.0).collect::<Vec<_>>()
        );
    }

    Ok(())
}

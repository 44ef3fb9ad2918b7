use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::{debug, info};
use rand::seq::SliceRandom;
use raylib::consts::{KeyboardKey, MouseButton};
use raylib::prelude::*;

mod constants;
mod controller;
mod gesture;
mod slide;
mod texture_loader;

use crate::constants::*;
use crate::controller::{NavCommand, SlideshowController};
use crate::gesture::{Swipe, SwipeDetector};
use crate::slide::PhotoSlide;
use crate::texture_loader::collect_image_paths;

/// Photo slideshow with autoplay, keyboard navigation and touch swipes.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing the photos to show
    directory: PathBuf,

    /// Seconds a slide stays up before autoplay advances
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL)]
    interval: f32,

    /// Minimum horizontal drag, in pixels, that counts as a swipe
    #[arg(long, default_value_t = DEFAULT_SWIPE_THRESHOLD)]
    swipe_threshold: f32,

    /// Show the photos in random order instead of file-name order
    #[arg(short, long)]
    shuffle: bool,

    /// Start fullscreen
    #[arg(short, long)]
    fullscreen: bool,

    /// Never advance automatically (manual navigation only)
    #[arg(long)]
    no_autoplay: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    ensure!(args.interval > 0.0, "--interval must be positive");
    ensure!(
        args.swipe_threshold >= 0.0,
        "--swipe-threshold must not be negative"
    );

    // --- Discover Photos ---
    let mut paths = collect_image_paths(&args.directory)?;
    if args.shuffle {
        paths.shuffle(&mut rand::rng());
    }
    info!("{} photos in {}", paths.len(), args.directory.display());

    let slides: Vec<PhotoSlide> = paths.into_iter().map(PhotoSlide::new).collect();
    let mut slideshow =
        SlideshowController::new(slides).context("cannot start the slideshow")?;
    if !args.no_autoplay {
        slideshow.start_autoplay(args.interval);
    }

    let mut swipe_detector = SwipeDetector::new(args.swipe_threshold);

    // --- Window ---
    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Diaporama")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    if args.fullscreen {
        rl.toggle_fullscreen();
    }

    // The first photo must be there for the first frame; the rest are
    // materialized one per frame inside the loop.
    slideshow.slides_mut()[0].ensure_texture(&mut rl, &thread);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // --- Manual Controls ---
        let mut commands: Vec<NavCommand> = Vec::new();
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            commands.push(NavCommand::Next);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            commands.push(NavCommand::Prev);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_HOME) {
            commands.push(NavCommand::GoTo(0));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_END) {
            commands.push(NavCommand::GoTo(-1)); // wraps to the last slide
        }

        // --- Touch / Drag Swipes ---
        // raylib reports touch through the mouse API, so one press/release
        // pair covers the mouse and a touchscreen. The detector only records
        // the coordinates; it never swallows the events.
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            swipe_detector.press(rl.get_mouse_x() as f32);
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            match swipe_detector.release(rl.get_mouse_x() as f32) {
                Some(Swipe::TowardPrevious) => commands.push(NavCommand::Prev),
                Some(Swipe::TowardNext) => commands.push(NavCommand::Next),
                None => {}
            }
        }

        // --- Autoplay Pause / Resume ---
        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            if slideshow.autoplay_running() {
                debug!("autoplay paused");
                slideshow.stop_autoplay();
            } else {
                debug!("autoplay resumed");
                slideshow.start_autoplay(args.interval);
            }
        }

        for command in commands {
            slideshow.handle(command);
        }
        slideshow.tick(dt);

        // --- Deferred Texture Loading ---
        let current = slideshow.current_index();
        slideshow.slides_mut()[current].ensure_texture(&mut rl, &thread);
        if let Some(pending) = slideshow.slides_mut().iter_mut().find(|s| s.is_pending()) {
            pending.ensure_texture(&mut rl, &thread);
        }

        // --- Update Fades ---
        for slide in slideshow.slides_mut() {
            slide.update(dt);
        }

        // --- Draw ---
        let screen_width = rl.get_screen_width() as f32;
        let screen_height = rl.get_screen_height() as f32;

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        for slide in slideshow.slides() {
            slide.draw(&mut d, screen_width, screen_height);
        }
    }

    Ok(())
}

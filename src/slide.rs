use std::path::PathBuf;

use log::warn;
use raylib::prelude::*;

use crate::constants::*;
use crate::controller::Slide;
use crate::texture_loader::load_texture_with_exif_rotation;

// Texture upload is deferred until a slide is first needed, so startup does
// not pay for the whole directory. A file that fails to decode is warned
// about once and never retried.
enum TextureSlot {
    Pending,
    Ready(Texture2D),
    Failed,
}

pub struct PhotoSlide {
    path: PathBuf,
    texture: TextureSlot,

    alpha: f32,
    target_alpha: f32,
    fade: Option<ease::Tween>,
    fade_timer: f32,
}

impl PhotoSlide {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            texture: TextureSlot::Pending,
            alpha: 0.0,
            target_alpha: 0.0,
            fade: None,
            fade_timer: 0.0,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.texture, TextureSlot::Pending)
    }

    // Materialize the texture if it has not been tried yet.
    pub fn ensure_texture(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        if !self.is_pending() {
            return;
        }
        match load_texture_with_exif_rotation(rl, thread, &self.path) {
            Ok(texture) => self.texture = TextureSlot::Ready(texture),
            Err(e) => {
                warn!("skipping {}: {e:#}", self.path.display());
                self.texture = TextureSlot::Failed;
            }
        }
    }

    fn begin_fade(&mut self, to: f32) {
        self.fade = Some(ease::Tween::new(
            ease::sine_in_out,
            self.alpha,
            to,
            FADE_DURATION,
        ));
        self.fade_timer = 0.0;
        self.target_alpha = to;
    }

    pub fn update(&mut self, dt: f32) {
        let Some(fade) = self.fade.as_mut() else {
            return;
        };
        self.alpha = fade.apply(dt);
        self.fade_timer += dt;
        if self.fade_timer >= FADE_DURATION {
            self.alpha = self.target_alpha;
            self.fade = None;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, screen_width: f32, screen_height: f32) {
        if self.alpha <= 0.0 {
            return;
        }
        let TextureSlot::Ready(texture) = &self.texture else {
            return; // not materialized yet (or failed): leave the backdrop
        };

        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;

        // Fit inside the window, centered, aspect ratio preserved
        let scale = (screen_width / tex_width).min(screen_height / tex_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let dest = Rectangle::new(
            (screen_width - scaled_width) * 0.5,
            (screen_height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        let tint = Color::new(255, 255, 255, (self.alpha.clamp(0.0, 1.0) * 255.0) as u8);

        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            tint,
        );
    }
}

// Activation state is expressed visually: active means fading toward fully
// opaque, inactive toward fully transparent.
impl Slide for PhotoSlide {
    fn activate(&mut self) {
        self.begin_fade(1.0);
    }

    fn deactivate(&mut self) {
        self.begin_fade(0.0);
    }
}

pub const WINDOW_WIDTH: i32 = 1280;             // Initial window size
pub const WINDOW_HEIGHT: i32 = 720;
pub const FPS: u32 = 60;                        // Render loop cap

pub const DEFAULT_INTERVAL: f32 = 5.0;          // Seconds a slide stays up before autoplay advances
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;  // Minimum horizontal drag (pixels) that counts as a swipe
pub const FADE_DURATION: f32 = 0.5;             // Cross-fade between slides (seconds)

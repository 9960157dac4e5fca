pub mod checker;
pub mod hex;
pub mod wcag;

pub use checker::{evaluate, evaluate_with};
pub use hex::{parse_hex_rgb, Rgb};
pub use wcag::{contrast_ratio, relative_luminance, ContrastResult, Level, LuminanceModel};

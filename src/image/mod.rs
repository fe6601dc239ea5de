pub mod buffer;
pub mod format;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::buffer::PixelBuffer;
pub use self::format::PixelFormat;
pub use self::traits::{ImageView, Rows};
pub use self::u8::{GrayImageU8, ImageU8};

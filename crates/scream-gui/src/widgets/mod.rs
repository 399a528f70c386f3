mod attribution;
mod map;
mod popup;

pub use attribution::Attribution;
pub use map::Map;
pub use popup::ZonePopup;

pub mod buttons;
pub mod keyboard;
pub mod wheel;

pub use buttons::wire_set_buttons;
pub use keyboard::wire_global_keydown;
pub use wheel::wire_wheel;

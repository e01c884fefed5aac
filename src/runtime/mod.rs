pub mod controller;
pub mod effect;
pub mod event;
pub mod reducer;

pub use controller::FormController;
pub use effect::Effect;
pub use event::FormEvent;
pub use reducer::Reducer;

pub mod form_state;
pub mod registry;
pub mod validation;

pub use form_state::{Banner, BannerTone, FormPhase, FormState};
pub use registry::{FieldBinding, FieldRegistry};
pub use validation::{ErrorSource, ErrorVisibility, ValidationState};

pub mod config;
pub mod core;
pub mod error;
pub mod i18n;
pub mod runtime;
pub mod state;
pub mod submission;
pub mod validation;
pub mod view;

pub use config::FormConfig;
pub use crate::core::value::Value;
pub use crate::core::values::{FieldError, FormValues};
pub use crate::core::{FieldKind, FieldName, ServiceKind};
pub use error::FormError;
pub use i18n::Translator;
pub use runtime::controller::FormController;
pub use runtime::effect::Effect;
pub use runtime::event::FormEvent;
pub use runtime::reducer::Reducer;
pub use state::form_state::{Banner, BannerTone, FormPhase, FormState};
pub use state::registry::{FieldBinding, FieldRegistry};
pub use submission::{
    JsonChannel, ReportedError, SubmissionChannel, SubmissionCompletion, SubmissionExecutor,
    SubmissionOutcome, SubmissionPayload,
};
pub use validation::schema::{PartnerSchema, Schema};
pub use validation::{ServerErrorPolicy, ValidationMode};
pub use view::{FieldView, FormView, SubmitView};

use crate::core::value::Value;
use regex::Regex;
use std::sync::LazyLock;

pub type ValidationError = String;
pub type Validator = Box<dyn Fn(&Value) -> Result<(), ValidationError> + Send + Sync>;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern")
});

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(validators: &[Validator], value: &Value) -> Result<(), ValidationError> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

pub fn required(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &Value| {
        if value.is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn email(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &Value| match value.as_text() {
        Some(text) if EMAIL.is_match(text.trim()) => Ok(()),
        _ => Err(message.clone()),
    })
}

/// Membership in a closed list of options.
pub fn one_of(options: &[&str], message: impl Into<String>) -> Validator {
    let options: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    let message = message.into();
    Box::new(move |value: &Value| match value.as_text() {
        Some(text) if options.iter().any(|o| o == text) => Ok(()),
        _ => Err(message.clone()),
    })
}

/// A checkbox that has to be ticked.
pub fn accepted(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &Value| {
        if value.as_bool() == Some(true) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

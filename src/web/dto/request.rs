//! Form DTOs for the Lentille web layer.
//!
//! Emptiness is checked by the domain services so that it surfaces as a
//! flash message; the DTOs only bound sizes and reject control characters.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{no_control_chars, no_control_chars_multiline};

/// Registration form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(default)]
    #[validate(
        length(max = 32),
        custom(function = "no_control_chars")
    )]
    pub username: String,
    #[serde(default)]
    #[validate(length(max = 128))]
    pub password: String,
}

/// Login form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(
        length(max = 32),
        custom(function = "no_control_chars")
    )]
    pub username: String,
    #[serde(default)]
    #[validate(length(max = 128))]
    pub password: String,
}

/// New thread form: title plus the opening post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewThreadForm {
    #[serde(default)]
    #[validate(
        length(max = 200),
        custom(function = "no_control_chars")
    )]
    pub title: String,
    #[serde(default)]
    #[validate(
        length(max = 10000),
        custom(function = "no_control_chars_multiline")
    )]
    pub content: String,
}

/// Reply form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReplyForm {
    #[serde(default)]
    #[validate(
        length(max = 10000),
        custom(function = "no_control_chars_multiline")
    )]
    pub content: String,
}

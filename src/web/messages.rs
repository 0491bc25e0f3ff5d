//! User-facing French messages.

use crate::LentilleError;

pub const LOGIN_REQUIRED: &str = "Vous devez être connecté pour accéder à cette page.";
pub const REGISTERED: &str = "Inscription réussie, bienvenue !";
pub const LOGGED_IN: &str = "Connexion réussie.";
pub const LOGGED_OUT: &str = "Vous êtes déconnecté.";
pub const THREAD_CREATED: &str = "Discussion créée.";
pub const REPLY_POSTED: &str = "Réponse publiée.";
pub const DUPLICATE_USER: &str = "Ce nom d'utilisateur est déjà pris.";
pub const UNKNOWN_USER: &str = "Utilisateur inconnu.";
pub const WRONG_PASSWORD: &str = "Mot de passe incorrect.";
pub const TOO_MANY_ATTEMPTS: &str = "Trop de tentatives de connexion. Réessayez plus tard.";
pub const INVALID_FORM: &str = "Formulaire invalide.";
pub const INTERNAL_ERROR: &str = "Une erreur interne est survenue.";

/// Message for a missing resource, keyed by the `NotFound` subject.
pub fn not_found(what: &str) -> &'static str {
    match what {
        "user" => UNKNOWN_USER,
        "category" => "Catégorie introuvable.",
        "thread" => "Discussion introuvable.",
        "camera" => "Appareil photo introuvable.",
        "telescope" => "Télescope introuvable.",
        _ => "Page introuvable.",
    }
}

/// Flash text for a failed form submission.
///
/// Unexpected errors are logged and replaced by a generic message.
pub fn describe(err: &LentilleError) -> String {
    match err {
        LentilleError::Validation(msg) => msg.clone(),
        LentilleError::DuplicateUser(_) => DUPLICATE_USER.to_string(),
        LentilleError::NotFound(what) => not_found(what).to_string(),
        LentilleError::InvalidCredentials => WRONG_PASSWORD.to_string(),
        LentilleError::Unauthenticated => LOGIN_REQUIRED.to_string(),
        other => {
            tracing::error!("Internal error: {}", other);
            INTERNAL_ERROR.to_string()
        }
    }
}

//! String and image lookup, injected into the screens.

use std::collections::HashMap;

use soothe_core::ImageSource;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringKey {
    AppName,
    LogoContentDescription,
    SignUp,
    LogIn,
    EmailAddress,
    Password,
    SignUpMessageFirst,
    SignUpMessageSecond,
    Search,
    FavoriteCollections,
    AlignYourBody,
    AlignYourMind,
    Home,
    Profile,
}

impl StringKey {
    pub const ALL: [StringKey; 14] = [
        StringKey::AppName,
        StringKey::LogoContentDescription,
        StringKey::SignUp,
        StringKey::LogIn,
        StringKey::EmailAddress,
        StringKey::Password,
        StringKey::SignUpMessageFirst,
        StringKey::SignUpMessageSecond,
        StringKey::Search,
        StringKey::FavoriteCollections,
        StringKey::AlignYourBody,
        StringKey::AlignYourMind,
        StringKey::Home,
        StringKey::Profile,
    ];

    /// Resource name, as used in override files.
    pub fn name(self) -> &'static str {
        match self {
            StringKey::AppName => "app_name",
            StringKey::LogoContentDescription => "logo_content_description",
            StringKey::SignUp => "sign_up",
            StringKey::LogIn => "log_in",
            StringKey::EmailAddress => "email_address",
            StringKey::Password => "password",
            StringKey::SignUpMessageFirst => "sign_up_message_first",
            StringKey::SignUpMessageSecond => "sign_up_message_second",
            StringKey::Search => "search",
            StringKey::FavoriteCollections => "favorite_collections",
            StringKey::AlignYourBody => "align_your_body",
            StringKey::AlignYourMind => "align_your_mind",
            StringKey::Home => "home",
            StringKey::Profile => "profile",
        }
    }

    pub fn from_name(name: &str) -> Option<StringKey> {
        StringKey::ALL.into_iter().find(|k| k.name() == name)
    }

    fn default_text(self) -> &'static str {
        match self {
            StringKey::AppName => "MySoothe",
            StringKey::LogoContentDescription => "MySoothe logo",
            StringKey::SignUp => "Sign up",
            StringKey::LogIn => "Log in",
            StringKey::EmailAddress => "Email address",
            StringKey::Password => "Password",
            StringKey::SignUpMessageFirst => "Don't have an account? ",
            StringKey::SignUpMessageSecond => "Sign up",
            StringKey::Search => "Search",
            StringKey::FavoriteCollections => "Favorite collections",
            StringKey::AlignYourBody => "Align your body",
            StringKey::AlignYourMind => "Align your mind",
            StringKey::Home => "Home",
            StringKey::Profile => "Profile",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageKey {
    Logo,
    WelcomeBackground,
    LoginBackground,
    /// Stand-in for remote images that are loading or failed to load.
    Placeholder,
}

pub trait ResourceProvider {
    fn string(&self, key: StringKey) -> String;
    fn image(&self, key: ImageKey) -> ImageSource;
}

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("malformed string overrides: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unknown string resource `{0}`")]
    UnknownKey(String),
}

/// English strings and drawables bundled with the app.
#[derive(Clone, Debug, Default)]
pub struct BundledResources {
    overrides: HashMap<StringKey, String>,
}

impl BundledResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a JSON object of `{"resource_name": "text"}` overrides.
    pub fn with_overrides_json(mut self, json: &str) -> Result<Self, ResourceError> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        for (name, text) in raw {
            let key =
                StringKey::from_name(&name).ok_or_else(|| ResourceError::UnknownKey(name.clone()))?;
            self.overrides.insert(key, text);
        }
        log::debug!("resources: {} string overrides", self.overrides.len());
        Ok(self)
    }
}

impl ResourceProvider for BundledResources {
    fn string(&self, key: StringKey) -> String {
        self.overrides
            .get(&key)
            .cloned()
            .unwrap_or_else(|| key.default_text().to_string())
    }

    fn image(&self, key: ImageKey) -> ImageSource {
        ImageSource::asset(match key {
            ImageKey::Logo => "logo",
            ImageKey::WelcomeBackground => "welcome_bg",
            ImageKey::LoginBackground => "login_bg",
            ImageKey::Placeholder => "placeholder",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let res = BundledResources::new();
        assert_eq!(res.string(StringKey::LogIn), "Log in");
        assert_eq!(res.image(ImageKey::Logo), ImageSource::asset("logo"));
    }

    #[test]
    fn overrides_apply() {
        let res = BundledResources::new()
            .with_overrides_json(r#"{"log_in": "Sign in", "search": "Find"}"#)
            .expect("valid overrides");
        assert_eq!(res.string(StringKey::LogIn), "Sign in");
        assert_eq!(res.string(StringKey::Search), "Find");
        assert_eq!(res.string(StringKey::Password), "Password");
    }

    #[test]
    fn overrides_reject_unknown_keys() {
        let err = BundledResources::new()
            .with_overrides_json(r#"{"log_out": "Bye"}"#)
            .unwrap_err();
        assert!(matches!(err, ResourceError::UnknownKey(k) if k == "log_out"));
    }

    #[test]
    fn overrides_reject_malformed_json() {
        let err = BundledResources::new()
            .with_overrides_json("[1, 2]")
            .unwrap_err();
        assert!(matches!(err, ResourceError::Malformed(_)));
    }

    #[test]
    fn names_round_trip() {
        for k in StringKey::ALL {
            assert_eq!(StringKey::from_name(k.name()), Some(k));
        }
    }
}

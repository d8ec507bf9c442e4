use clap::ValueEnum;
use lens::{field_lens, Lens};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Fields outside the known schema, written back unchanged
pub type Extra = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub zip: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub address: Arc<Address>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub created: String,
    pub modified: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// The document the CLI reads and writes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user: Arc<User>,
    pub meta: Arc<Meta>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Named places in a [`Profile`] the CLI can focus on
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Focus {
    /// user.name
    Name,
    /// user.address.city
    City,
    /// user.address.zip
    Zip,
    /// meta.created
    Created,
    /// meta.modified
    Modified,
}

impl Focus {
    pub fn lens(self) -> Lens<Profile, String> {
        match self {
            Focus::Name => through_user("user.name", user_name()),
            Focus::City => through_user(
                "user.address.city",
                through_address(field_lens!(Address, city)),
            ),
            Focus::Zip => through_user(
                "user.address.zip",
                through_address(field_lens!(Address, zip)),
            ),
            Focus::Created => through_meta("meta.created", field_lens!(Meta, created)),
            Focus::Modified => through_meta("meta.modified", field_lens!(Meta, modified)),
        }
    }
}

fn user_name() -> Lens<Arc<User>, String> {
    Lens::new(
        |user: &Arc<User>| user.name.clone(),
        |name, user: &Arc<User>| {
            Arc::new(User {
                name,
                ..User::clone(user)
            })
        },
    )
}

/// Lift a lens on `Address` to one on `Arc<User>`, copying only the user and address
fn through_address(inner: Lens<Address, String>) -> Lens<Arc<User>, String> {
    let getter = inner.clone();
    Lens::new(
        move |user: &Arc<User>| getter.view(&user.address),
        move |value, user: &Arc<User>| {
            Arc::new(User {
                address: Arc::new(inner.set(value, &user.address)),
                ..User::clone(user)
            })
        },
    )
}

fn through_user(label: &'static str, inner: Lens<Arc<User>, String>) -> Lens<Profile, String> {
    let getter = inner.clone();
    Lens::labeled(
        label,
        move |profile: &Profile| getter.view(&profile.user),
        move |value, profile: &Profile| Profile {
            user: inner.set(value, &profile.user),
            ..profile.clone()
        },
    )
}

fn through_meta(label: &'static str, inner: Lens<Meta, String>) -> Lens<Profile, String> {
    let getter = inner.clone();
    Lens::labeled(
        label,
        move |profile: &Profile| getter.view(&profile.meta),
        move |value, profile: &Profile| Profile {
            meta: Arc::new(inner.set(value, &profile.meta)),
            ..profile.clone()
        },
    )
}

/// String transforms available to `over`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transform {
    /// Convert to upper case
    Upper,
    /// Convert to lower case
    Lower,
    /// Strip leading and trailing whitespace
    Trim,
    /// Reverse the characters
    Reverse,
}

impl Transform {
    pub fn apply(self, value: String) -> String {
        match self {
            Transform::Upper => value.to_uppercase(),
            Transform::Lower => value.to_lowercase(),
            Transform::Trim => value.trim().to_string(),
            Transform::Reverse => value.chars().rev().collect(),
        }
    }
}

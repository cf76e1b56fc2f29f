use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::theme::ThemeContext;
use crate::error::StoreError;

/// Navigation targets in the header bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Categories,
    Cart,
    Profit,
    Profile,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Categories,
        Section::Cart,
        Section::Profit,
        Section::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Categories => "Categories",
            Section::Cart => "Cart",
            Section::Profit => "Profit",
            Section::Profile => "Profile",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

impl FromStr for Section {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StoreError::UnknownSection(s.to_string()))
    }
}

/// The signed-in shopper
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub points: u64,
}

/// Navigation bar: store name, nav entries with the current one highlighted,
/// cart badge and the signed-in user.
pub struct Header<'a> {
    pub store_name: &'a str,
    pub current: Section,
    pub user: Option<&'a User>,
    pub cart_count: u32,
}

impl Header<'_> {
    pub fn nav_line(&self) -> String {
        Section::ALL
            .iter()
            .map(|&section| {
                let label = match section {
                    Section::Cart => format!("{} ({})", section.label(), self.cart_count),
                    other => other.label().to_string(),
                };
                if section == self.current {
                    format!("[{label}]")
                } else {
                    format!(" {label} ")
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn user_line(&self) -> String {
        match self.user {
            Some(user) => format!("{} · {} pts", user.name, user.points),
            None => "Sign in".to_string(),
        }
    }

    pub fn render(&self, theme: &ThemeContext) -> String {
        let nav = self.nav_line();
        let width = nav.chars().count().max(self.store_name.chars().count());
        let mut out = String::new();
        out.push_str(&format!(
            "{}  ({} mode)\n",
            self.store_name,
            theme.theme()
        ));
        out.push_str(&nav);
        out.push('\n');
        out.push_str(&self.user_line());
        out.push('\n');
        out.push_str(&theme.rule(width));
        out
    }
}

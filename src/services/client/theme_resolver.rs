//! Theme resolution
//!
//! Picks the theme a migration reads from or writes to: the source side by
//! role (`"main"` is the published theme), the destination side by the
//! configured theme name. A miss aborts the whole run.

use std::fmt;

use tracing::info;

use super::types::Theme;
use super::ShopifyClient;
use crate::services::config::StoreConfig;
use crate::services::errors::MigrationError;

/// Predicate selecting one theme out of a store's theme list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeSelector<'a> {
    /// Theme with this role, e.g. `"main"`.
    Role(&'a str),
    /// Theme with this exact name.
    Name(&'a str),
}

impl ThemeSelector<'_> {
    fn matches(&self, theme: &Theme) -> bool {
        match self {
            ThemeSelector::Role(role) => theme.role == *role,
            ThemeSelector::Name(name) => theme.name == *name,
        }
    }
}

impl fmt::Display for ThemeSelector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeSelector::Role(role) => write!(f, "role '{}'", role),
            ThemeSelector::Name(name) => write!(f, "name '{}'", name),
        }
    }
}

/// First theme in list order satisfying the selector.
pub fn select_theme<'t>(themes: &'t [Theme], selector: ThemeSelector<'_>) -> Option<&'t Theme> {
    themes.iter().find(|theme| selector.matches(theme))
}

/// Fetch a store's theme list and resolve one theme. Not finding a match
/// is fatal for the migration.
pub async fn resolve_theme(
    client: &ShopifyClient,
    store: &StoreConfig,
    selector: ThemeSelector<'_>,
) -> Result<Theme, MigrationError> {
    let themes = client.list_themes(store).await?;
    match select_theme(&themes, selector) {
        Some(theme) => {
            info!("Resolved {} to theme {} ({})", selector, theme.id, theme.name);
            Ok(theme.clone())
        }
        None => Err(MigrationError::ThemeNotFound {
            selector: selector.to_string(),
            store: store.base_url.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(id: u64, name: &str, role: &str) -> Theme {
        Theme {
            id,
            name: name.to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn selects_main_theme_by_role() {
        let themes = vec![theme(1, "Dawn", "main")];
        let selected = select_theme(&themes, ThemeSelector::Role("main")).unwrap();
        assert_eq!(selected.id, 1);
    }

    #[test]
    fn selects_destination_theme_by_name() {
        let themes = vec![theme(9, "Copy", "unpublished")];
        let selected = select_theme(&themes, ThemeSelector::Name("Copy")).unwrap();
        assert_eq!(selected.id, 9);
    }

    #[test]
    fn no_main_theme_is_not_found() {
        let themes = vec![
            theme(2, "Draft", "unpublished"),
            theme(3, "Other", "development"),
        ];
        assert!(select_theme(&themes, ThemeSelector::Role("main")).is_none());
    }

    #[test]
    fn first_match_wins_in_list_order() {
        let themes = vec![
            theme(4, "Copy", "unpublished"),
            theme(5, "Copy", "unpublished"),
        ];
        let selected = select_theme(&themes, ThemeSelector::Name("Copy")).unwrap();
        assert_eq!(selected.id, 4);
    }

    #[tokio::test]
    async fn resolve_theme_surfaces_client_errors() {
        let client = ShopifyClient::new();
        let store = StoreConfig {
            base_url: "http://127.0.0.1:1/admin/api/2024-01/".to_string(),
            access_token: "shpat_test".to_string(),
        };
        let result = resolve_theme(&client, &store, ThemeSelector::Role("main")).await;
        assert!(matches!(result, Err(MigrationError::Client(_))));
    }
}

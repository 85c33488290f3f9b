use tracing::trace;

use super::menu::{AccountsItem, AdvancedItem, MenuItem, ScaleUnit, SettingsItem};
use crate::config::WalletConfig;

/// Navigation state of the wallet window.
///
/// Owned by whoever drives the frame loop; nothing here is global. Each
/// sub-menu keeps its own selection so switching away and back restores it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    menu: MenuItem,
    settings: SettingsItem,
    accounts: AccountsItem,
    advanced: AdvancedItem,
    scale: ScaleUnit,
}

impl UiState {
    /// Initial state, with the scale selector seeded from `wallet.scale` when it
    /// names a known unit.
    pub fn from_config(wallet: &WalletConfig) -> Self {
        let scale = ScaleUnit::from_exponent(wallet.scale).unwrap_or_default();
        trace!(target: "nano_imgui::ui", configured = wallet.scale, %scale, "Initial scale");
        Self {
            scale,
            ..Self::default()
        }
    }

    pub fn menu(&self) -> MenuItem {
        self.menu
    }

    pub fn settings(&self) -> SettingsItem {
        self.settings
    }

    pub fn accounts(&self) -> AccountsItem {
        self.accounts
    }

    pub fn advanced(&self) -> AdvancedItem {
        self.advanced
    }

    pub fn scale(&self) -> ScaleUnit {
        self.scale
    }

    pub fn select_menu(&mut self, item: MenuItem) {
        self.menu = item;
    }

    pub fn select_settings(&mut self, item: SettingsItem) {
        self.settings = item;
    }

    pub fn select_accounts(&mut self, item: AccountsItem) {
        self.accounts = item;
    }

    pub fn select_advanced(&mut self, item: AdvancedItem) {
        self.advanced = item;
    }

    pub fn select_scale(&mut self, unit: ScaleUnit) {
        self.scale = unit;
    }

    /// Labels shown in the middle pane for the current menu. Empty for Home and Send.
    pub fn sub_menu_labels(&self) -> Vec<&'static str> {
        match self.menu {
            MenuItem::Home | MenuItem::Send => Vec::new(),
            MenuItem::Settings => SettingsItem::ALL.iter().map(|i| i.label()).collect(),
            MenuItem::Accounts => AccountsItem::ALL.iter().map(|i| i.label()).collect(),
            MenuItem::Advanced => AdvancedItem::ALL.iter().map(|i| i.label()).collect(),
        }
    }

    /// Index into [`UiState::sub_menu_labels`] of the current selection.
    pub fn selected_sub_menu(&self) -> Option<usize> {
        match self.menu {
            MenuItem::Home | MenuItem::Send => None,
            MenuItem::Settings => SettingsItem::ALL.iter().position(|i| *i == self.settings),
            MenuItem::Accounts => AccountsItem::ALL.iter().position(|i| *i == self.accounts),
            MenuItem::Advanced => AdvancedItem::ALL.iter().position(|i| *i == self.advanced),
        }
    }

    /// The scale selector only appears under `Advanced`.
    pub fn shows_scale_selector(&self) -> bool {
        self.menu == MenuItem::Advanced
    }

    /// Caption under the scale selector, e.g. `1x10^30 raw`.
    pub fn scale_caption(&self) -> String {
        format!("1x10^{} raw", self.scale.exponent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let st = UiState::default();
        assert_eq!(st.menu(), MenuItem::Home);
        assert!(st.sub_menu_labels().is_empty());
        assert_eq!(st.selected_sub_menu(), None);
        assert!(!st.shows_scale_selector());
        assert_eq!(st.scale_caption(), "1x10^1 raw");
    }

    #[test]
    fn test_from_config_seeds_scale() {
        let wallet = WalletConfig {
            log_to_stderr: false,
            scale: 30,
        };
        let st = UiState::from_config(&wallet);
        assert_eq!(st.scale(), ScaleUnit::Mnano);
        assert_eq!(st.scale_caption(), "1x10^30 raw");
    }

    #[test]
    fn test_from_config_unknown_scale_is_raw() {
        let wallet = WalletConfig {
            log_to_stderr: false,
            scale: 7,
        };
        assert_eq!(UiState::from_config(&wallet).scale(), ScaleUnit::Raw);
    }

    #[test]
    fn test_sub_menu_follows_menu() {
        let mut st = UiState::default();
        st.select_menu(MenuItem::Settings);
        assert_eq!(
            st.sub_menu_labels(),
            vec!["Lock", "Set/Change Password", "Change Representative"]
        );
        assert_eq!(st.selected_sub_menu(), Some(0));

        st.select_menu(MenuItem::Advanced);
        st.select_advanced(AdvancedItem::NodeStatistics);
        assert_eq!(st.sub_menu_labels().len(), 10);
        assert_eq!(st.selected_sub_menu(), Some(9));
        assert!(st.shows_scale_selector());
    }

    #[test]
    fn test_sub_menu_selection_survives_switching() {
        let mut st = UiState::default();
        st.select_menu(MenuItem::Accounts);
        st.select_accounts(AccountsItem::ImportWallet);
        st.select_menu(MenuItem::Send);
        assert_eq!(st.selected_sub_menu(), None);
        st.select_menu(MenuItem::Accounts);
        assert_eq!(st.selected_sub_menu(), Some(2));
        assert_eq!(st.sub_menu_labels()[2], "Import Wallet");
    }

    #[test]
    fn test_select_scale_updates_caption() {
        let mut st = UiState::default();
        st.select_scale(ScaleUnit::Knano);
        assert_eq!(st.scale_caption(), "1x10^27 raw");
        st.select_settings(SettingsItem::Lock);
        assert_eq!(st.settings(), SettingsItem::Lock);
    }
}

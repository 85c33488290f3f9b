use std::fmt;

/// Top-level navigation shown in the left pane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum MenuItem {
    #[default]
    Home,
    Send,
    Settings,
    Accounts,
    Advanced,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::Home,
        MenuItem::Send,
        MenuItem::Settings,
        MenuItem::Accounts,
        MenuItem::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Home => "Home",
            MenuItem::Send => "Send",
            MenuItem::Settings => "Settings",
            MenuItem::Accounts => "Accounts",
            MenuItem::Advanced => "Advanced",
        }
    }
}

/// Entries under `Settings`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SettingsItem {
    #[default]
    Lock,
    SetPassword,
    ChangeRepresentative,
}

impl SettingsItem {
    pub const ALL: [SettingsItem; 3] = [
        SettingsItem::Lock,
        SettingsItem::SetPassword,
        SettingsItem::ChangeRepresentative,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsItem::Lock => "Lock",
            SettingsItem::SetPassword => "Set/Change Password",
            SettingsItem::ChangeRepresentative => "Change Representative",
        }
    }
}

/// Entries under `Accounts`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum AccountsItem {
    #[default]
    UseAccount,
    CreateAccount,
    ImportWallet,
    ViewWalletSeed,
    ImportAdhoc,
}

impl AccountsItem {
    pub const ALL: [AccountsItem; 5] = [
        AccountsItem::UseAccount,
        AccountsItem::CreateAccount,
        AccountsItem::ImportWallet,
        AccountsItem::ViewWalletSeed,
        AccountsItem::ImportAdhoc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AccountsItem::UseAccount => "Use Account",
            AccountsItem::CreateAccount => "Create Account",
            AccountsItem::ImportWallet => "Import Wallet",
            AccountsItem::ViewWalletSeed => "View Wallet Seed",
            AccountsItem::ImportAdhoc => "Import Adhoc",
        }
    }
}

/// Entries under `Advanced`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum AdvancedItem {
    #[default]
    Ledger,
    Peers,
    SearchReceivable,
    InitiateBootstrap,
    RefreshWallet,
    CreateBlock,
    EnterBlock,
    BlockViewer,
    AccountViewer,
    NodeStatistics,
}

impl AdvancedItem {
    pub const ALL: [AdvancedItem; 10] = [
        AdvancedItem::Ledger,
        AdvancedItem::Peers,
        AdvancedItem::SearchReceivable,
        AdvancedItem::InitiateBootstrap,
        AdvancedItem::RefreshWallet,
        AdvancedItem::CreateBlock,
        AdvancedItem::EnterBlock,
        AdvancedItem::BlockViewer,
        AdvancedItem::AccountViewer,
        AdvancedItem::NodeStatistics,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdvancedItem::Ledger => "Ledger",
            AdvancedItem::Peers => "Peers",
            AdvancedItem::SearchReceivable => "Search for Receivable",
            AdvancedItem::InitiateBootstrap => "Initiate Bootstrap",
            AdvancedItem::RefreshWallet => "Refresh Wallet",
            AdvancedItem::CreateBlock => "Create Block",
            AdvancedItem::EnterBlock => "Enter Block",
            AdvancedItem::BlockViewer => "Block Viewer",
            AdvancedItem::AccountViewer => "Account Viewer",
            AdvancedItem::NodeStatistics => "Node Statistics",
        }
    }
}

/// Display unit for amounts, named by its power of ten in raw.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ScaleUnit {
    Mnano,
    Knano,
    Nano,
    #[default]
    Raw,
}

impl ScaleUnit {
    pub const ALL: [ScaleUnit; 4] = [
        ScaleUnit::Mnano,
        ScaleUnit::Knano,
        ScaleUnit::Nano,
        ScaleUnit::Raw,
    ];

    /// Exponent as shown in the scale caption. Raw is shown as `10^1`.
    pub fn exponent(self) -> u64 {
        match self {
            ScaleUnit::Mnano => 30,
            ScaleUnit::Knano => 27,
            ScaleUnit::Nano => 24,
            ScaleUnit::Raw => 1,
        }
    }

    /// Map a configured `wallet.scale` to a unit. `0` also means raw.
    pub fn from_exponent(exponent: u64) -> Option<Self> {
        match exponent {
            0 | 1 => Some(ScaleUnit::Raw),
            other => Self::ALL.into_iter().find(|unit| unit.exponent() == other),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScaleUnit::Mnano => "Mnano",
            ScaleUnit::Knano => "knano",
            ScaleUnit::Nano => "nano",
            ScaleUnit::Raw => "raw",
        }
    }
}

impl fmt::Display for ScaleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_from_exponent() {
        assert_eq!(ScaleUnit::from_exponent(30), Some(ScaleUnit::Mnano));
        assert_eq!(ScaleUnit::from_exponent(27), Some(ScaleUnit::Knano));
        assert_eq!(ScaleUnit::from_exponent(24), Some(ScaleUnit::Nano));
        assert_eq!(ScaleUnit::from_exponent(0), Some(ScaleUnit::Raw));
        assert_eq!(ScaleUnit::from_exponent(1), Some(ScaleUnit::Raw));
        assert_eq!(ScaleUnit::from_exponent(12), None);
    }

    fn assert_unique(labels: &[&'static str]) {
        let set: std::collections::BTreeSet<_> = labels.iter().collect();
        assert_eq!(set.len(), labels.len(), "duplicate label in {labels:?}");
    }

    #[test]
    fn test_labels_are_unique() {
        assert_unique(&MenuItem::ALL.map(MenuItem::label));
        assert_unique(&SettingsItem::ALL.map(SettingsItem::label));
        assert_unique(&AccountsItem::ALL.map(AccountsItem::label));
        assert_unique(&AdvancedItem::ALL.map(AdvancedItem::label));
        assert_unique(&ScaleUnit::ALL.map(ScaleUnit::label));
    }

    #[test]
    fn test_defaults_are_first_entries() {
        assert_eq!(MenuItem::ALL[0], MenuItem::default());
        assert_eq!(SettingsItem::ALL[0], SettingsItem::default());
        assert_eq!(AccountsItem::ALL[0], AccountsItem::default());
        assert_eq!(AdvancedItem::ALL[0], AdvancedItem::default());
        assert_eq!(ScaleUnit::default(), ScaleUnit::Raw);
    }
}

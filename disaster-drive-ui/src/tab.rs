/// The four pages of the main window, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Backup,
    Recovery,
    Health,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Backup, Tab::Recovery, Tab::Health, Tab::Profile];

    /// Title shown on the tab strip. Also the name recorded in the
    /// monitoring log on every switch.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Backup => "🔄 Data Backup",
            Tab::Recovery => "💾 Recovery Simulation",
            Tab::Health => "📊 System Health",
            Tab::Profile => "👤 User Profile",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Tab::Backup => "Initiate Secure Data Backup",
            Tab::Recovery => "Simulate Data Recovery Process",
            Tab::Health => "Real-Time System Health Monitoring",
            Tab::Profile => "Manage User Profile",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_order_and_titles() {
        let titles: Vec<_> = Tab::ALL.iter().map(|t| t.title()).collect();
        assert_eq!(
            titles,
            vec![
                "🔄 Data Backup",
                "💾 Recovery Simulation",
                "📊 System Health",
                "👤 User Profile",
            ]
        );
        assert_eq!(Tab::default(), Tab::Backup);
    }
}

use serde::{Deserialize, Serialize};

use super::navigation::RouteConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatCard {
    pub id: String,
    pub label: String,
    pub value: String,
    pub trend: String,
}

impl StatCard {
    fn new(id: &str, label: &str, value: &str, trend: &str) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
            trend: trend.into(),
        }
    }
}

/// Headline cards on the home page. Display values only, nothing is computed.
pub fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard::new("users", "Active Users", "1,284", "+8.2% this week"),
        StatCard::new("sessions", "Sessions", "9,340", "+4.6% this week"),
        StatCard::new("conversion", "Conversion Rate", "6.7%", "+1.1% this week"),
        StatCard::new("revenue", "Revenue", "$48,200", "+12.4% this week"),
    ]
}

#[derive(Debug, Default, Deserialize)]
pub struct NavigationQuery {
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    #[serde(flatten)]
    pub route: RouteConfig,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct Navigation {
    pub items: Vec<NavItem>,
    pub current: Option<RouteConfig>,
}

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

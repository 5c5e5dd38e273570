//! Sidebar navigation for the dashboard shell.
//!
//! Pure data: ordered groups of ordered items, where an item is either a link
//! or a collapsible section holding ordered sub-links. Icons are names the UI
//! resolves against its icon set.

mod sidebar;

pub use sidebar::SIDEBAR;

use serde::Serialize;

/// Icon names from the UI's icon library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    AlertCircle,
    AppWindow,
    AudioWaveform,
    Ban,
    Building2,
    Bug,
    Command,
    GalleryVerticalEnd,
    HelpCircle,
    LayoutDashboard,
    Lock,
    LockKeyhole,
    MessageSquare,
    ServerCrash,
    Settings,
    Users,
    UserX,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarData {
    pub user: SidebarUser,
    pub teams: &'static [Team],
    pub nav_groups: &'static [NavGroup],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarUser {
    pub name: &'static str,
    pub email: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub name: &'static str,
    pub logo: Icon,
    pub plan: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavGroup {
    pub title: &'static str,
    pub items: &'static [NavItem],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NavItem {
    Link(NavLink),
    Collapsible(NavCollapsible),
}

#[cfg(test)]
impl NavItem {
    pub fn title(&self) -> &'static str {
        match self {
            NavItem::Link(link) => link.title,
            NavItem::Collapsible(section) => section.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub title: &'static str,
    pub url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavCollapsible {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    pub items: &'static [NavLink],
}

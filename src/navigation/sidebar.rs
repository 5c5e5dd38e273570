use super::{Icon, NavCollapsible, NavGroup, NavItem, NavLink, SidebarData, SidebarUser, Team};

const fn link(title: &'static str, url: &'static str, icon: Option<Icon>) -> NavLink {
    NavLink {
        title,
        url,
        badge: None,
        icon,
    }
}

pub static SIDEBAR: SidebarData = SidebarData {
    user: SidebarUser {
        name: "satnaing",
        email: "satnaingdev@gmail.com",
        avatar: "/avatars/shadcn.jpg",
    },
    teams: &[
        Team {
            name: "Shadcn Admin",
            logo: Icon::Command,
            plan: "Vite + ShadcnUI",
        },
        Team {
            name: "Acme Inc",
            logo: Icon::GalleryVerticalEnd,
            plan: "Enterprise",
        },
        Team {
            name: "Acme Corp.",
            logo: Icon::AudioWaveform,
            plan: "Startup",
        },
    ],
    nav_groups: &[
        NavGroup {
            title: "General",
            items: &[
                NavItem::Link(link("Dashboard", "/", Some(Icon::LayoutDashboard))),
                NavItem::Link(link("Companies", "/companies", Some(Icon::Building2))),
                NavItem::Link(link("Apps", "/apps", Some(Icon::AppWindow))),
                NavItem::Link(NavLink {
                    title: "Chats",
                    url: "/chats",
                    badge: Some("3"),
                    icon: Some(Icon::MessageSquare),
                }),
                NavItem::Link(link("Users", "/users", Some(Icon::Users))),
            ],
        },
        NavGroup {
            title: "Pages",
            items: &[
                NavItem::Collapsible(NavCollapsible {
                    title: "Auth",
                    badge: None,
                    icon: Some(Icon::Lock),
                    items: &[
                        link("Sign In", "/sign-in", None),
                        link("Sign In (2 Col)", "/sign-in-2", None),
                        link("Sign Up", "/sign-up", None),
                        link("Forgot Password", "/forgot-password", None),
                        link("OTP", "/otp", None),
                    ],
                }),
                NavItem::Collapsible(NavCollapsible {
                    title: "Errors",
                    badge: None,
                    icon: Some(Icon::Bug),
                    items: &[
                        link("Unauthorized", "/401", Some(Icon::LockKeyhole)),
                        link("Forbidden", "/403", Some(Icon::UserX)),
                        link("Not Found", "/404", Some(Icon::AlertCircle)),
                        link("Internal Server Error", "/500", Some(Icon::ServerCrash)),
                        link("Maintenance Error", "/503", Some(Icon::Ban)),
                    ],
                }),
            ],
        },
        NavGroup {
            title: "Other",
            items: &[
                NavItem::Link(link("Settings", "/settings", Some(Icon::Settings))),
                NavItem::Link(link("Help Center", "/help-center", Some(Icon::HelpCircle))),
            ],
        },
    ],
};

//! Static content tables rendered by the landing page.
//!
//! Everything here is compile-time data. Components only ever read these
//! tables, so records carry no identity beyond their position.

/// One member of the team roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributorRecord {
    /// Display name, also used in the portrait alt text.
    pub name: &'static str,
    /// Portrait asset path, relative to the site base URL.
    pub image_ref: &'static str,
    /// LinkedIn profile.
    pub linkedin_url: &'static str,
    /// GitHub profile.
    pub github_url: &'static str,
}

/// One selectable entry of the feature showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSection {
    /// Heading shown in the selector list.
    pub title: &'static str,
    /// Longer copy, hidden on narrow viewports.
    pub description: &'static str,
    /// Animated media asset path, relative to the site base URL.
    pub media_ref: &'static str,
}

/// Icon drawn for an outbound navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandIcon {
    /// GitHub mark.
    GitHub,
    /// LinkedIn mark.
    LinkedIn,
    /// Newspaper glyph used for the Medium article.
    Newspaper,
}

/// Where a navigation bar entry leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// Smooth scroll to an in-page anchor id.
    ScrollAnchor(&'static str),
    /// External page opened in a new browsing context.
    External {
        /// Destination URL.
        href: &'static str,
        /// Icon rendered inside the link.
        icon: BrandIcon,
        /// Whether the repository star count is appended to this link.
        shows_star_count: bool,
    },
}

/// One navigation bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Visible label for scroll links, `title` attribute for icon links.
    pub label: &'static str,
    /// Link destination.
    pub target: NavTarget,
}

impl NavLink {
    /// Scroll links only make sense on the wide layout.
    pub fn is_scroll_link(&self) -> bool {
        matches!(self.target, NavTarget::ScrollAnchor(_))
    }
}

/// Colour treatment of a hero call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTone {
    /// Orange primary button.
    Primary,
    /// Blue secondary button.
    Secondary,
}

/// A hero call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroAction {
    /// Button text.
    pub label: &'static str,
    /// Destination URL.
    pub href: &'static str,
    /// Colour treatment.
    pub tone: ActionTone,
}

/// Anchor id of the hero section.
pub const LANDING_ANCHOR: &str = "landing";
/// Anchor id of the feature showcase section.
pub const FEATURES_ANCHOR: &str = "features";
/// Anchor id of the team section.
pub const TEAM_ANCHOR: &str = "team";
/// Anchor id of the copyright footer.
pub const COPYRIGHT_ANCHOR: &str = "copyright";

/// Source repository of the product.
pub const REPOSITORY_URL: &str = "https://github.com/oslabs-beta/Kafka-Sonar";
/// Company page on LinkedIn.
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/kafka-sonar/about/";
/// Launch article.
pub const ARTICLE_URL: &str = "https://medium.com/@upnata/making-waves-with-kafka-sonar-leveraging-docker-to-streamline-kafka-cluster-monitoring-and-19613a4463b2#8db0";
/// Docker Hub listing of the extension.
pub const EXTENSION_URL: &str = "https://hub.docker.com/extensions/kafkasonar/kafkasonar";

/// Product logo shown at the left of the navigation bar.
pub const LOGO_REF: &str = "/kafka-sonar-black-logo.png";

/// Role line printed under every contributor name.
pub const CONTRIBUTOR_ROLE: &str = "Software Engineer";

/// The team roster, in display order.
pub static CONTRIBUTORS: [ContributorRecord; 4] = [
    ContributorRecord {
        name: "Steven Kim",
        image_ref: "/steven.jpeg",
        linkedin_url: "https://www.linkedin.com/in/kimsteven1/",
        github_url: "https://github.com/stekim4",
    },
    ContributorRecord {
        name: "Michael Way",
        image_ref: "/michael.jpg",
        linkedin_url: "https://www.linkedin.com/in/michaeljway/",
        github_url: "https://github.com/mjsway",
    },
    ContributorRecord {
        name: "Upasana Natarajan",
        image_ref: "/upasana.jpg",
        linkedin_url: "https://www.linkedin.com/in/upasananatarajan/",
        github_url: "https://github.com/unatarajan",
    },
    ContributorRecord {
        name: "Kareem Saleh",
        image_ref: "/kareem.png",
        linkedin_url: "https://www.linkedin.com/in/kareemhs",
        github_url: "https://github.com/kareemhs",
    },
];

/// The feature showcase entries, in display order.
pub static FEATURE_SECTIONS: [FeatureSection; 3] = [
    FeatureSection {
        title: "Effortless Connection Setup",
        description: "Input your Kafka cluster details into our intuitive interface to set up \
                      connection. Once configured, Sonar remembers the connection details and \
                      automatically generates the necessary Prometheus and Grafana configuration \
                      files in the background.",
        media_ref: "/add-connection.gif",
    },
    FeatureSection {
        title: "Real-time Metrics at Your Fingertips",
        description: "Unlock the power of monitoring with a single click. Dive into a holistic \
                      view of your Kafka cluster by tracking 20 essential metrics. From \
                      comprehensive Cluster Overviews to granular Partition Insights and Resource \
                      Utilization, get real-time data as things unfold.",
        media_ref: "/conn-dis.gif",
    },
    FeatureSection {
        title: "Download and Explore on Demand",
        description: "Easily download your metrics in a handy .csv format whenever you need. \
                      Behind the scenes, metrics are scraped every 60 seconds, ensuring you're \
                      always updated. Rest easy knowing they're stored securely in a local, \
                      containerized database.",
        media_ref: "/download.gif",
    },
];

/// Navigation bar entries, scroll links first.
pub static NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Features",
        target: NavTarget::ScrollAnchor(FEATURES_ANCHOR),
    },
    NavLink {
        label: "Team",
        target: NavTarget::ScrollAnchor(TEAM_ANCHOR),
    },
    NavLink {
        label: "GitHub",
        target: NavTarget::External {
            href: REPOSITORY_URL,
            icon: BrandIcon::GitHub,
            shows_star_count: true,
        },
    },
    NavLink {
        label: "LinkedIn",
        target: NavTarget::External {
            href: LINKEDIN_URL,
            icon: BrandIcon::LinkedIn,
            shows_star_count: false,
        },
    },
    NavLink {
        label: "Medium",
        target: NavTarget::External {
            href: ARTICLE_URL,
            icon: BrandIcon::Newspaper,
            shows_star_count: false,
        },
    },
];

/// Hero call-to-action buttons.
pub static HERO_ACTIONS: [HeroAction; 2] = [
    HeroAction {
        label: "Read the Docs",
        href: REPOSITORY_URL,
        tone: ActionTone::Primary,
    },
    HeroAction {
        label: "Download the Extension",
        href: EXTENSION_URL,
        tone: ActionTone::Secondary,
    },
];

/// Navigation entries for one layout. The narrow layout drops scroll links.
pub fn nav_links_for(compact: bool) -> impl Iterator<Item = &'static NavLink> {
    NAV_LINKS
        .iter()
        .filter(move |link| !(compact && link.is_scroll_link()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_layout_drops_scroll_links_only() {
        let wide: Vec<_> = nav_links_for(false).map(|link| link.label).collect();
        let narrow: Vec<_> = nav_links_for(true).map(|link| link.label).collect();

        assert_eq!(wide, vec!["Features", "Team", "GitHub", "LinkedIn", "Medium"]);
        assert_eq!(narrow, vec!["GitHub", "LinkedIn", "Medium"]);
    }

    #[test]
    fn scroll_links_point_at_page_anchors() {
        let anchors: Vec<_> = NAV_LINKS
            .iter()
            .filter_map(|link| match link.target {
                NavTarget::ScrollAnchor(anchor) => Some(anchor),
                NavTarget::External {
                    ..
                } => None,
            })
            .collect();
        assert_eq!(anchors, vec![FEATURES_ANCHOR, TEAM_ANCHOR]);
    }

    #[test]
    fn only_repository_link_carries_star_count() {
        let starred: Vec<_> = NAV_LINKS
            .iter()
            .filter(|link| {
                matches!(link.target, NavTarget::External {
                    shows_star_count: true,
                    ..
                })
            })
            .collect();
        assert_eq!(starred.len(), 1);
        assert!(matches!(starred[0].target, NavTarget::External {
            href: REPOSITORY_URL,
            ..
        }));
    }

    #[test]
    fn asset_refs_are_root_relative() {
        assert!(FEATURE_SECTIONS
            .iter()
            .all(|section| section.media_ref.starts_with('/')));
        assert!(CONTRIBUTORS
            .iter()
            .all(|member| member.image_ref.starts_with('/')));
    }
}

pub mod navbar {
    pub const LOGO_ALT: &str = "Product Logo";
    pub const NAV_MAIN_ARIA: &str = "Main navigation";
    pub const NAV_COMPACT_ARIA: &str = "Compact navigation";
}

pub mod hero {
    pub const HEADLINE_TOP: &str = "KAFKA CLUSTER MONITORING";
    pub const HEADLINE_BOTTOM: &str = "ON DOCKER DESKTOP";
    pub const TAGLINE: &str = "Kafka Sonar is a first-of-its-kind Docker Desktop extension \
                               aimed at enhancing the Kafka developer experience.";
}

pub mod features {
    pub const HEADING: &str = "Features";
    pub const MEDIA_ALT: &str = "Feature GIF";
    pub const TABLIST_ARIA: &str = "Kafka Sonar features";
}

pub mod team {
    pub const HEADING: &str = "Meet the Kafka Sonar team";
    pub const IMAGE_ALT_PREFIX: &str = "image of ";
    pub const GITHUB_TITLE: &str = "GitHub";
    pub const LINKEDIN_TITLE: &str = "LinkedIn";
}

pub mod footer {
    pub const COPYRIGHT: &str = "© Kafka Sonar 2023 | MIT License";
}

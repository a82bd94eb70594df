//! Content tables and target-independent logic for the Kafka Sonar landing
//! page. Builds natively and for `wasm32-unknown-unknown`.

pub mod content;
pub mod lifecycle;
pub mod repo_metadata;
pub mod showcase;

pub use content::{
    ActionTone, BrandIcon, ContributorRecord, FeatureSection, HeroAction, NavLink, NavTarget,
    CONTRIBUTORS, FEATURE_SECTIONS, HERO_ACTIONS, NAV_LINKS,
};
pub use lifecycle::MountGuard;
pub use repo_metadata::{parse_repo_metadata, star_label, MetadataFetchError, RepoMetadata};
pub use showcase::ShowcaseSelection;

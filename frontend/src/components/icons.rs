use kafka_sonar_shared::BrandIcon;
use yew::prelude::*;

/// Lucide 线性图标，路径来自 <https://lucide.dev>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    GitHub,
    LinkedIn,
    Newspaper,
}

impl IconName {
    /// SVG path data; multi-shape icons are joined into one path.
    pub fn path(&self) -> &'static str {
        match self {
            IconName::GitHub => {
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 \
                 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 \
                 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 \
                 1.23-.15 1.85v4M9 18c-4.51 2-5-2-7-2"
            },
            IconName::LinkedIn => {
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 \
                 6-6zM2 9h4v12H2zM2 4a2 2 0 1 0 4 0 2 2 0 1 0-4 0"
            },
            IconName::Newspaper => {
                "M4 22h16a2 2 0 0 0 2-2V4a2 2 0 0 0-2-2H8a2 2 0 0 0-2 2v16a2 2 0 0 1-2 2Zm0 0a2 2 0 \
                 0 1-2-2v-9c0-1.1.9-2 2-2h2M18 14h-8M15 18h-5M10 6h8v4h-8V6Z"
            },
        }
    }
}

impl From<BrandIcon> for IconName {
    fn from(icon: BrandIcon) -> Self {
        match icon {
            BrandIcon::GitHub => IconName::GitHub,
            BrandIcon::LinkedIn => IconName::LinkedIn,
            BrandIcon::Newspaper => IconName::Newspaper,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        color,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };

    html! {
        <svg
            class={classes!(
                "inline-flex",
                "items-center",
                "justify-center",
                "shrink-0"
            )}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke={color.clone()}
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path d={name.path()} />
        </svg>
    }
}

use yew::prelude::*;

/// Line icons drawn on a 24x24 grid with a 2px round stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    AlertCircle,
    Award,
    BarChart,
    Brain,
    Calendar,
    Check,
    ChevronDown,
    Clock,
    FileText,
    Globe,
    Mail,
    MessageSquare,
    Mic,
    Palette,
    PhoneCall,
    PieChart,
    Play,
    Send,
    Star,
    TrendingUp,
    UserCheck,
    Users,
}

enum Shape {
    Path(&'static str),
    Circle(f64, f64, f64),
    Rect { x: f64, y: f64, width: f64, height: f64, rx: f64 },
}

use Shape::{Circle, Path};

const HEAD_AND_SHOULDERS: Shape = Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2");

impl Icon {
    fn shapes(&self) -> &'static [Shape] {
        match self {
            Icon::AlertCircle => &[Circle(12.0, 12.0, 10.0), Path("M12 8v4"), Path("M12 16h.01")],
            Icon::Award => &[
                Circle(12.0, 8.0, 6.0),
                Path("M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"),
            ],
            Icon::BarChart => &[
                Path("M3 3v18h18"),
                Path("M18 17V9"),
                Path("M13 17V5"),
                Path("M8 17v-3"),
            ],
            Icon::Brain => &[
                Path("M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z"),
                Path("M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z"),
                Path("M12 5v13"),
            ],
            Icon::Calendar => &[
                Shape::Rect { x: 3.0, y: 4.0, width: 18.0, height: 18.0, rx: 2.0 },
                Path("M16 2v4"),
                Path("M8 2v4"),
                Path("M3 10h18"),
            ],
            Icon::Check => &[Path("M20 6 9 17l-5-5")],
            Icon::ChevronDown => &[Path("m6 9 6 6 6-6")],
            Icon::Clock => &[Circle(12.0, 12.0, 10.0), Path("M12 6v6l4 2")],
            Icon::FileText => &[
                Path("M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z"),
                Path("M14 2v6h6"),
                Path("M16 13H8"),
                Path("M16 17H8"),
                Path("M10 9H8"),
            ],
            Icon::Globe => &[
                Circle(12.0, 12.0, 10.0),
                Path("M2 12h20"),
                Path("M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"),
            ],
            Icon::Mail => &[
                Shape::Rect { x: 2.0, y: 4.0, width: 20.0, height: 16.0, rx: 2.0 },
                Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
            ],
            Icon::MessageSquare => &[Path(
                "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z",
            )],
            Icon::Mic => &[
                Path("M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3Z"),
                Path("M19 10v2a7 7 0 0 1-14 0v-2"),
                Path("M12 19v3"),
            ],
            Icon::Palette => &[
                Circle(13.5, 6.5, 0.5),
                Circle(17.5, 10.5, 0.5),
                Circle(8.5, 7.5, 0.5),
                Circle(6.5, 12.5, 0.5),
                Path("M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z"),
            ],
            Icon::PhoneCall => &[
                Path("M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"),
                Path("M14.05 2a9 9 0 0 1 8 7.94"),
                Path("M14.05 6A5 5 0 0 1 18 10"),
            ],
            Icon::PieChart => &[
                Path("M21.21 15.89A10 10 0 1 1 8 2.83"),
                Path("M22 12A10 10 0 0 0 12 2v10z"),
            ],
            Icon::Play => &[Path("M6 3l14 9-14 9V3z")],
            Icon::Send => &[Path("m22 2-7 20-4-9-9-4Z"), Path("M22 2 11 13")],
            Icon::Star => &[Path(
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            )],
            Icon::TrendingUp => &[Path("M22 7l-8.5 8.5-5-5L2 17"), Path("M16 7h6v6")],
            Icon::UserCheck => &[
                HEAD_AND_SHOULDERS,
                Circle(9.0, 7.0, 4.0),
                Path("m16 11 2 2 4-4"),
            ],
            Icon::Users => &[
                HEAD_AND_SHOULDERS,
                Circle(9.0, 7.0, 4.0),
                Path("M22 21v-2a4 4 0 0 0-3-3.87"),
                Path("M16 3.13a4 4 0 0 1 0 7.75"),
            ],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("none"))]
    pub fill: AttrValue,
}

#[function_component(LucideIcon)]
pub fn lucide_icon(props: &IconProps) -> Html {
    let shapes = props.icon.shapes().iter().map(|shape| match shape {
        Shape::Path(d) => html! { <path d={*d} /> },
        Shape::Circle(cx, cy, r) => html! {
            <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
        },
        Shape::Rect { x, y, width, height, rx } => html! {
            <rect
                x={x.to_string()}
                y={y.to_string()}
                width={width.to_string()}
                height={height.to_string()}
                rx={rx.to_string()}
            />
        },
    });

    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill={props.fill.clone()}
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for shapes }
        </svg>
    }
}

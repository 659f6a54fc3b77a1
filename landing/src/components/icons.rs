//! Inline SVG icons (Lucide outline set, 24px grid).

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Menu,
    Close,
    Phone,
    Mail,
    ChevronRight,
    Star,
    ShieldCheck,
    Thermometer,
    Ruler,
    PenTool,
    MapPin,
    Clock,
    CheckCircle,
    ArrowRight,
    Maximize,
    Lock,
    Sun,
    Wind,
    Umbrella,
    FileText,
    Layout,
    Facebook,
    Instagram,
    Linkedin,
}

impl Glyph {
    /// Path data (`d` attribute), stroked with `currentColor`.
    pub fn path(self) -> &'static str {
        match self {
            Glyph::Menu => "M4 6h16M4 12h16M4 18h16",
            Glyph::Close => "M18 6 6 18M6 6l12 12",
            Glyph::Phone => "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.127.96.361 1.903.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.907.339 1.85.573 2.81.7A2 2 0 0 1 22 16.92z",
            Glyph::Mail => "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6",
            Glyph::ChevronRight => "m9 18 6-6-6-6",
            Glyph::Star => "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            Glyph::ShieldCheck => "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10zM9 12l2 2 4-4",
            Glyph::Thermometer => "M14 4v10.54a4 4 0 1 1-4 0V4a2 2 0 0 1 4 0Z",
            Glyph::Ruler => "M21.3 15.3a2.4 2.4 0 0 1 0 3.4l-2.6 2.6a2.4 2.4 0 0 1-3.4 0L2.7 8.7a2.41 2.41 0 0 1 0-3.4l2.6-2.6a2.41 2.41 0 0 1 3.4 0ZM14.5 12.5l2-2M11.5 9.5l2-2M8.5 6.5l2-2M17.5 15.5l2-2",
            Glyph::PenTool => "M12 19l7-7 3 3-7 7-3-3zM18 13l-1.5-7.5L2 2l3.5 14.5L13 18l5-5zM2 2l7.586 7.586M11 13a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
            Glyph::MapPin => "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0zM12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            Glyph::Clock => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 6v6l4 2",
            Glyph::CheckCircle => "M22 11.08V12a10 10 0 1 1-5.93-9.14M22 4 12 14.01l-3-3",
            Glyph::ArrowRight => "M5 12h14M12 5l7 7-7 7",
            Glyph::Maximize => "M8 3H5a2 2 0 0 0-2 2v3M21 8V5a2 2 0 0 0-2-2h-3M3 16v3a2 2 0 0 0 2 2h3M16 21h3a2 2 0 0 0 2-2v-3",
            Glyph::Lock => "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2zM7 11V7a5 5 0 0 1 10 0v4",
            Glyph::Sun => "M12 16a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41",
            Glyph::Wind => "M17.7 7.7a2.5 2.5 0 1 1 1.8 4.3H2M9.6 4.6A2 2 0 1 1 11 8H2M12.6 19.4A2 2 0 1 0 14 16H2",
            Glyph::Umbrella => "M22 12a10.06 10.06 1 0 0-20 0ZM12 12v8a2 2 0 0 0 4 0M12 2v1",
            Glyph::FileText => "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8zM14 2v6h6M16 13H8M16 17H8M10 9H8",
            Glyph::Layout => "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2zM3 9h18M9 21V9",
            Glyph::Facebook => "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z",
            Glyph::Instagram => "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5zM16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37zM17.5 6.5h.01",
            Glyph::Linkedin => "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4z",
        }
    }
}

/// Renders `glyph` as an inline outline SVG.
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::Phone size=24 class="text-blue-700" /> }
/// ```
#[component]
pub fn Icon(
    glyph: Glyph,
    #[prop(default = 24)] size: u32,
    #[prop(optional)] class: &'static str,
    /// Fill the shape with `currentColor` (rating stars).
    #[prop(optional)]
    filled: bool,
) -> impl IntoView {
    let fill = if filled { "currentColor" } else { "none" };
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill=fill
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=glyph.path()></path>
        </svg>
    }
}

/// Five filled stars.
#[component]
pub fn Rating(#[prop(default = 16)] size: u32) -> impl IntoView {
    (0..5)
        .map(|_| view! { <Icon glyph=Glyph::Star size=size filled=true /> })
        .collect_view()
}

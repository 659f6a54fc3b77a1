//! Building blocks shared by every page: buttons, section headings, cards.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

const BUTTON_BASE: &str = "px-6 py-3 rounded-lg font-semibold transition-all duration-300 transform hover:-translate-y-0.5 shadow-lg flex items-center justify-center gap-2 disabled:opacity-70 disabled:cursor-not-allowed";

pub fn button_class(variant: ButtonVariant, extra: &str) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "bg-amber-500 hover:bg-amber-600 text-white border border-amber-500",
        ButtonVariant::Secondary => "bg-slate-800 hover:bg-slate-700 text-white border border-slate-700",
        ButtonVariant::Outline => {
            "bg-transparent border-2 border-white text-white hover:bg-white hover:text-slate-900"
        }
    };
    if extra.is_empty() {
        format!("{BUTTON_BASE} {variant}")
    } else {
        format!("{BUTTON_BASE} {variant} {extra}")
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] class: &'static str,
    /// `type` attribute; forms pass `"submit"`.
    #[prop(default = "button")]
    kind: &'static str,
    #[prop(optional, into)] disabled: Option<Signal<bool>>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=kind
            class=button_class(variant, class)
            disabled=move || disabled.map(|d| d.get()).unwrap_or(false)
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Serif heading with the amber underline bar.
#[component]
pub fn SectionTitle(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(default = true)] centered: bool,
    /// Light text for dark backgrounds.
    #[prop(optional)]
    dark: bool,
    #[prop(optional)] class: &'static str,
    #[prop(default = "text-3xl md:text-4xl")] title_size: &'static str,
) -> impl IntoView {
    let align = if centered { "text-center" } else { "text-left" };
    let center = if centered { "mx-auto" } else { "" };
    let title_color = if dark { "text-white" } else { "text-slate-900" };
    let subtitle_color = if dark { "text-slate-300" } else { "text-slate-600" };

    view! {
        <div class=format!("mb-8 md:mb-12 {align} {class}")>
            <h2 class=format!("{title_size} font-serif font-bold mb-4 {title_color}")>{title}</h2>
            <div class=format!("h-1 w-24 bg-amber-500 rounded mb-6 {center}")></div>
            {subtitle.map(|s| view! {
                <p class=format!("text-lg max-w-2xl {center} {subtitle_color}")>{s}</p>
            })}
        </div>
    }
}

#[component]
pub fn Card(
    #[prop(optional)] class: &'static str,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=format!("bg-white rounded-xl shadow-md hover:shadow-xl transition-shadow duration-300 overflow-hidden border border-slate-100 {class}")
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_is_amber() {
        let class = button_class(ButtonVariant::default(), "");
        assert!(class.ends_with("border border-amber-500"));
        assert!(class.contains("disabled:cursor-not-allowed"));
    }

    #[test]
    fn extra_classes_are_appended() {
        let class = button_class(ButtonVariant::Secondary, "w-full text-lg");
        assert!(class.ends_with("border-slate-700 w-full text-lg"));
    }
}

use leptos::ev;
use leptos::prelude::*;

use super::icons::{Glyph, Icon};
use super::ui::{Button, ButtonVariant};
use crate::router::{PageId, Router, use_router};
use crate::shell::{HeaderStyle, NAV_LINKS};

#[component]
pub fn Nav() -> impl IntoView {
    let router = use_router();
    let (scroll_y, set_scroll_y) = signal(0.0_f64);

    let listener = window_event_listener(ev::scroll, move |_| {
        set_scroll_y.set(window().scroll_y().unwrap_or(0.0));
    });
    on_cleanup(move || listener.remove());

    let style = Memo::new(move |_| HeaderStyle::derive(scroll_y.get(), router.menu_open(), router.page()));

    let desktop_links = NAV_LINKS
        .iter()
        .map(|link| {
            let page = link.page;
            view! {
                <button
                    class=move || style.with(|s| s.link_class(page))
                    on:click=move |_| router.navigate(page)
                >
                    {link.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class=move || style.with(|s| s.nav_class())>
            <div class="container mx-auto px-4 flex justify-between items-center">
                <div
                    class=move || style.with(|s| s.logo_class())
                    on:click=move |_| router.navigate(PageId::Home)
                >
                    <span class="flex items-center gap-1">
                        "InterPlus " <span class="text-amber-500 text-3xl leading-none">"."</span> " Fenêtre"
                    </span>
                    <span class=move || style.with(|s| s.tagline_class())>"Partenaire Schüco"</span>
                </div>

                <div class="hidden lg:flex items-center gap-8">
                    {desktop_links}
                    <Button class="text-sm px-5 py-2" on_click=move |_| router.navigate(PageId::Contact)>
                        "Devis Gratuit"
                    </Button>
                </div>

                <button
                    class=move || format!("lg:hidden {}", style.with(|s| s.text_class()))
                    aria-label="Menu"
                    on:click=move |_| router.toggle_menu()
                >
                    {move || {
                        let glyph = if router.menu_open() { Glyph::Close } else { Glyph::Menu };
                        view! { <Icon glyph=glyph size=28 /> }
                    }}
                </button>
            </div>
        </nav>

        <Show when=move || router.menu_open()>
            <div class="fixed inset-0 bg-slate-900 z-40 flex flex-col items-center justify-center space-y-8 animate-fade-in lg:hidden">
                {overlay_links(router)}
                <Button
                    variant=ButtonVariant::Primary
                    class="mt-8"
                    on_click=move |_| router.navigate(PageId::Contact)
                >
                    "Demander un devis"
                </Button>
            </div>
        </Show>
    }
}

fn overlay_links(router: Router) -> impl IntoView {
    NAV_LINKS
        .iter()
        .map(|link| {
            let page = link.page;
            view! {
                <button
                    class="text-2xl font-serif font-bold text-white hover:text-amber-500 transition"
                    on:click=move |_| router.navigate(page)
                >
                    {link.label}
                </button>
            }
        })
        .collect_view()
}

// Products page - the two window ranges + other services
use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, Glyph, Icon, SectionTitle};
use crate::content::{OTHER_SERVICES, RANGES, Range};
use crate::router::{PageId, use_router};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="pt-24 pb-20 bg-slate-50 min-h-screen">
            <div class="container mx-auto px-4">
                <SectionTitle
                    title="Nos Gammes de Fenêtres"
                    subtitle="Partenaire Schüco, nous vous offrons l'excellence technique et esthétique."
                />

                {RANGES
                    .iter()
                    .enumerate()
                    .map(|(idx, range)| view! { <RangeBlock range=range image_first=idx % 2 == 0 /> })
                    .collect_view()}

                <div class="text-center py-10">
                    <h3 class="text-2xl font-bold text-slate-800 mb-4">"Nous réalisons aussi"</h3>
                    <div class="flex flex-wrap justify-center gap-4">
                        {OTHER_SERVICES
                            .into_iter()
                            .map(|(id, label)| view! {
                                <span
                                    class="px-6 py-2 bg-white border border-slate-200 rounded-full text-slate-700 font-semibold shadow-sm hover:bg-slate-100 cursor-pointer transition"
                                    on:click=move |_| router.navigate(PageId::Product(id))
                                >
                                    {label}
                                </span>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Image and copy side by side; alternate blocks swap sides on desktop.
#[component]
fn RangeBlock(range: &'static Range, image_first: bool) -> impl IntoView {
    let router = use_router();
    let page = PageId::Product(range.product);
    let (image_order, text_order) = if image_first {
        ("", "")
    } else {
        ("order-1 md:order-2", "order-2 md:order-1")
    };
    let variant = if image_first { ButtonVariant::Primary } else { ButtonVariant::Secondary };

    view! {
        <div
            class="bg-white rounded-2xl shadow-lg overflow-hidden mb-12 grid md:grid-cols-2 cursor-pointer group"
            on:click=move |_| router.navigate(page)
        >
            <div class=format!("h-64 md:h-auto relative overflow-hidden {image_order}")>
                <img
                    src=range.img
                    alt=range.img_alt
                    class="w-full h-full object-cover transition duration-700 group-hover:scale-110"
                />
                {range.badge.map(|b| view! {
                    <div class="absolute top-4 left-4 bg-slate-900 text-white px-3 py-1 rounded text-sm font-bold">{b}</div>
                })}
            </div>
            <div class=format!("p-8 md:p-12 flex flex-col justify-center {text_order}")>
                <h3 class="text-3xl font-serif font-bold text-slate-900 mb-2 group-hover:text-amber-500 transition">
                    {range.title}
                </h3>
                <p class="text-blue-600 font-semibold mb-4">{range.tagline}</p>
                <p class="text-slate-600 mb-6 leading-relaxed">{range.text}</p>
                <ul class="space-y-2 mb-8 text-slate-700">
                    {range
                        .bullets
                        .into_iter()
                        .map(|b| view! {
                            <li class="flex items-center gap-2">
                                <Icon glyph=Glyph::CheckCircle size=16 class="text-amber-500" />
                                {b}
                            </li>
                        })
                        .collect_view()}
                </ul>
                <Button variant=variant>
                    "En savoir plus"
                </Button>
            </div>
        </div>
    }
}

// Gallery page - completed projects with category filter
use leptos::prelude::*;

use crate::components::SectionTitle;
use crate::gallery::{EMPTY_GALLERY_MESSAGE, GalleryFilter, PROJECTS, filter_projects};

fn filter_button_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-full text-sm font-semibold transition duration-300 bg-slate-900 text-white shadow-lg transform scale-105"
    } else {
        "px-4 py-2 rounded-full text-sm font-semibold transition duration-300 bg-white text-slate-600 border border-slate-200 hover:bg-slate-100"
    }
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let (filter, set_filter) = signal(GalleryFilter::All);
    let visible = Memo::new(move |_| filter_projects(&PROJECTS, filter.get()));

    let buttons = GalleryFilter::ALL_FILTERS
        .into_iter()
        .map(|f| {
            view! {
                <button
                    class=move || filter_button_class(filter.get() == f)
                    on:click=move |_| set_filter.set(f)
                >
                    {f.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="pt-24 pb-20 bg-slate-50 min-h-screen">
            <div class="container mx-auto px-4">
                <SectionTitle
                    title="Nos Réalisations"
                    subtitle="Découvrez la transformation de ces habitats en Île-de-France."
                />

                <div class="flex justify-center gap-4 mb-10 flex-wrap">{buttons}</div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 animate-fade-in">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|item| view! {
                                <div class="group relative overflow-hidden rounded-xl bg-slate-900 cursor-pointer h-72">
                                    <img
                                        src=item.thumbnail()
                                        alt=item.kind
                                        class="w-full h-full object-cover transition duration-500 group-hover:scale-110 group-hover:opacity-40"
                                    />
                                    <div class="absolute inset-0 p-6 flex flex-col justify-end opacity-0 group-hover:opacity-100 transition duration-300">
                                        <span class="text-amber-400 text-xs font-bold uppercase tracking-wider mb-1">{item.kind}</span>
                                        <h3 class="text-white font-bold text-xl">{item.location}</h3>
                                        <p class="text-slate-200 text-sm mt-2">{item.description}</p>
                                    </div>
                                </div>
                            })
                            .collect_view()
                    }}

                    <Show when=move || visible.with(Vec::is_empty)>
                        <div class="col-span-full text-center py-10 text-slate-500">{EMPTY_GALLERY_MESSAGE}</div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_filter_is_dark() {
        assert!(filter_button_class(true).contains("bg-slate-900 text-white"));
        assert!(filter_button_class(false).contains("bg-white text-slate-600"));
    }
}

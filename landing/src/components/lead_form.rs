//! Quote request form.
//!
//! Each rendered form owns its own [`LeadController`]; the controller lives in
//! a local `StoredValue` so the view closures stay `Send`.

use std::rc::Rc;
use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{Glyph, Icon};
use super::ui::Button;
use crate::config::SITE;
use crate::error::LeadError;
use crate::lead::{
    EmailJs, FormPhase, LeadController, LeadFields, ProjectType, Recaptcha, SubmitOutcome,
    UNSPECIFIED_PROJECT,
};

type SiteController = LeadController<Recaptcha, EmailJs>;

const INPUT: &str = "w-full px-4 py-3 rounded-lg border border-slate-300 focus:border-blue-600 focus:ring-1 focus:ring-blue-600 outline-none transition";

/// Label, disabled flag and arrow visibility of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SubmitButton {
    label: &'static str,
    disabled: bool,
    arrow: bool,
}

impl SubmitButton {
    fn for_phase(phase: FormPhase) -> Self {
        let sending = phase == FormPhase::Sending;
        Self {
            label: if sending { "Envoi en cours..." } else { "Recevoir mon devis" },
            disabled: sending,
            arrow: !sending,
        }
    }
}

fn input_error_message(err: &LeadError) -> Option<String> {
    if !err.is_input_error() {
        return None;
    }
    Some(match err {
        LeadError::MissingField(name) => format!("{} est requis.", field_label(name)),
        _ => "Adresse email invalide.".to_string(),
    })
}

fn field_label(name: &str) -> &'static str {
    match name {
        "user_name" => "Votre nom",
        "user_phone" => "Votre téléphone",
        _ => "Votre email",
    }
}

#[component]
pub fn LeadForm(
    /// Sidebar/hero variant without the centered max width.
    #[prop(optional)]
    compact: bool,
    /// Product or page the request is about.
    #[prop(optional, into)]
    subject: Option<String>,
) -> impl IntoView {
    let (phase, set_phase) = signal(FormPhase::Idle);
    let fields = RwSignal::new(LeadFields::default());
    let (input_error, set_input_error) = signal(None::<String>);

    let controller: StoredValue<Rc<SiteController>, LocalStorage> = StoredValue::new_local(Rc::new(
        LeadController::new(
            Recaptcha::new(SITE.recaptcha_site_key),
            EmailJs::new(SITE.emailjs_endpoint),
        )
        .on_phase_change(move |p| set_phase.set(p)),
    ));

    let submit_subject = subject.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get_value();
        let snapshot = fields.get_untracked();
        let subject = submit_subject.clone();
        set_input_error.set(None);

        spawn_local(async move {
            let outcome = controller.submit(&snapshot, subject.as_deref()).await;
            match &outcome {
                SubmitOutcome::Delivered => {
                    set_timeout(
                        move || controller.confirmation_elapsed(),
                        Duration::from_millis(SITE.confirmation_ms),
                    );
                }
                SubmitOutcome::Failed(_) => {
                    let _ = window().alert_with_message(&SITE.delivery_failure_message());
                }
                SubmitOutcome::Invalid(err) => set_input_error.set(input_error_message(err)),
                SubmitOutcome::Busy | SubmitOutcome::Dropped => {}
            }
            fields.update(|f| f.settle(&outcome));
        });
    };

    let button = Memo::new(move |_| SubmitButton::for_phase(phase.get()));
    let disabled = Signal::derive(move || button.with(|b| b.disabled));
    let form_class = if compact {
        "bg-white p-6 md:p-8 rounded-xl shadow-2xl border-t-4 border-amber-500"
    } else {
        "bg-white p-6 md:p-8 rounded-xl shadow-2xl border-t-4 border-amber-500 max-w-xl mx-auto"
    };
    let intro = match &subject {
        Some(s) if !s.is_empty() => format!("Pour votre projet : {s}"),
        _ => "Recevez votre estimation sous 24h. Sans engagement.".to_string(),
    };

    view! {
        <Show
            when=move || phase.get() != FormPhase::Submitted
            fallback=|| view! { <Confirmation /> }
        >
            <form class=form_class on:submit=on_submit.clone()>
                <h3 class="text-2xl font-bold text-slate-900 mb-2">"Devis gratuit & rapide"</h3>
                <p class="text-slate-500 mb-6 text-sm">{intro.clone()}</p>

                <div class="space-y-4">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <input
                            required
                            type="text"
                            name="user_name"
                            placeholder="Votre Nom"
                            class=INPUT
                            prop:value=move || fields.with(|f| f.user_name.clone())
                            on:input=move |ev| fields.update(|f| f.user_name = event_target_value(&ev))
                        />
                        <input
                            required
                            type="tel"
                            name="user_phone"
                            placeholder="Téléphone"
                            class=INPUT
                            prop:value=move || fields.with(|f| f.user_phone.clone())
                            on:input=move |ev| fields.update(|f| f.user_phone = event_target_value(&ev))
                        />
                    </div>
                    <input
                        required
                        type="email"
                        name="user_email"
                        placeholder="Email"
                        class=INPUT
                        prop:value=move || fields.with(|f| f.user_email.clone())
                        on:input=move |ev| fields.update(|f| f.user_email = event_target_value(&ev))
                    />

                    <select
                        name="project_type"
                        class=format!("{INPUT} text-slate-700")
                        prop:value=move || {
                            fields.with(|f| f.project_type.map(ProjectType::value).unwrap_or(UNSPECIFIED_PROJECT))
                        }
                        on:change=move |ev| {
                            fields.update(|f| f.project_type = ProjectType::from_value(&event_target_value(&ev)))
                        }
                    >
                        <option value=UNSPECIFIED_PROJECT>"Type de projet..."</option>
                        {ProjectType::ALL
                            .into_iter()
                            .map(|kind| view! { <option value=kind.value()>{kind.label()}</option> })
                            .collect_view()}
                    </select>

                    <textarea
                        name="message"
                        rows="3"
                        placeholder="Décrivez votre projet (dimensions, matériaux souhaités...)"
                        class=INPUT
                        prop:value=move || fields.with(|f| f.message.clone())
                        on:input=move |ev| fields.update(|f| f.message = event_target_value(&ev))
                    ></textarea>

                    {move || input_error.get().map(|msg| view! {
                        <p class="text-sm text-red-600" role="alert">{msg}</p>
                    })}

                    <Button kind="submit" class="w-full text-lg" disabled=disabled>
                        {move || button.with(|b| b.label)}
                        <Show when=move || button.with(|b| b.arrow)>
                            <Icon glyph=Glyph::ArrowRight size=20 />
                        </Show>
                    </Button>
                    <p class="text-xs text-slate-400 text-center mt-2">"Vos données restent confidentielles."</p>
                </div>
            </form>
        </Show>
    }
}

#[component]
fn Confirmation() -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 rounded-lg p-8 text-center animate-fade-in">
            <Icon glyph=Glyph::CheckCircle size=64 class="text-green-500 mx-auto mb-4" />
            <h3 class="text-2xl font-bold text-green-800 mb-2">"Demande reçue !"</h3>
            <p class="text-green-700">
                "Merci de votre confiance. Un expert InterPlus vous rappellera sous 24h."
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_labels() {
        assert_eq!(field_label("user_name"), "Votre nom");
        assert_eq!(field_label("user_phone"), "Votre téléphone");
        assert_eq!(field_label("user_email"), "Votre email");
    }

    #[test]
    fn button_is_disabled_only_while_sending() {
        let sending = SubmitButton::for_phase(FormPhase::Sending);
        assert!(sending.disabled);
        assert!(!sending.arrow);
        assert_eq!(sending.label, "Envoi en cours...");

        for phase in [FormPhase::Idle, FormPhase::Submitted] {
            let button = SubmitButton::for_phase(phase);
            assert!(!button.disabled);
            assert_eq!(button.label, "Recevoir mon devis");
        }
    }

    #[test]
    fn only_field_errors_reach_the_form() {
        assert_eq!(
            input_error_message(&LeadError::MissingField("user_phone")).as_deref(),
            Some("Votre téléphone est requis.")
        );
        assert_eq!(
            input_error_message(&LeadError::InvalidEmail("thomas".into())).as_deref(),
            Some("Adresse email invalide.")
        );
        assert_eq!(input_error_message(&LeadError::VerifierNotReady), None);
    }
}

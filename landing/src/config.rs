//! Static site configuration.
//!
//! The third-party keys are public client identifiers and ship embedded in the
//! bundle, there is no runtime configuration source.

/// Everything the site needs to know about the company and its providers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    pub company: &'static str,
    pub phone_display: &'static str,
    pub phone_href: &'static str,
    pub email: &'static str,
    pub showroom_address: &'static str,
    pub service_area: &'static str,
    pub opening_hours: &'static str,

    /// EmailJS service the lead template is bound to.
    pub emailjs_service_id: &'static str,
    pub emailjs_template_id: &'static str,
    /// EmailJS public key (`user_id` in the REST payload).
    pub emailjs_public_key: &'static str,
    pub emailjs_endpoint: &'static str,

    pub recaptcha_site_key: &'static str,
    pub recaptcha_language: &'static str,
    /// Action name every lead token is scoped to.
    pub recaptcha_action: &'static str,

    /// How long the "request received" panel stays up, in milliseconds.
    pub confirmation_ms: u64,
    /// Scroll offset past which the header turns opaque.
    pub header_scroll_threshold: f64,
}

pub const SITE: SiteConfig = SiteConfig {
    company: "InterPlus Fenêtre",
    phone_display: "01 42 52 10 00",
    phone_href: "tel:0142521000",
    email: "contact@interplus-fenetre.fr",
    showroom_address: "17 Rue Gilberte Desnoyers, 93600, Aulnay-sous-Bois",
    service_area: "Paris & Île-de-France",
    opening_hours: "Lun-Ven: 9h-19h",

    emailjs_service_id: "service_os7pi6x",
    emailjs_template_id: "template_knr9ro7",
    emailjs_public_key: "Od5g3ybRVdYBOBT53",
    emailjs_endpoint: "https://api.emailjs.com/api/v1.0/email/send",

    recaptcha_site_key: "6Le7T2AsAAAAANMRJKV0xW7eshv7K7I-o03-EP9V",
    recaptcha_language: "fr",
    recaptcha_action: "contact_form",

    confirmation_ms: 8_000,
    header_scroll_threshold: 50.0,
};

impl SiteConfig {
    /// `mailto:` link for the contact address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Message shown when a lead could not be delivered.
    pub fn delivery_failure_message(&self) -> String {
        format!(
            "Une erreur est survenue lors de l'envoi. Contactez-nous au {}.",
            self.phone_display
        )
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        SITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_points_to_the_phone_line() {
        let msg = SITE.delivery_failure_message();
        assert!(msg.contains("01 42 52 10 00"));
    }

    #[test]
    fn confirmation_window_is_eight_seconds() {
        assert_eq!(SiteConfig::default().confirmation_ms, 8_000);
        assert_eq!(SITE.recaptcha_action, "contact_form");
    }

    #[test]
    fn default_config_is_the_site() {
        assert_eq!(SiteConfig::default(), SITE);
        assert!(SITE.header_scroll_threshold > 0.0);
    }
}

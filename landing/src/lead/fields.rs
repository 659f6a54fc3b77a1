//! What the visitor types into the quote form, and the EmailJS payload built from it.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::error::LeadError;

/// Sent when the visitor leaves the project type select untouched.
pub const UNSPECIFIED_PROJECT: &str = "Non spécifié";
/// Sent as `context_subject` when the form is not attached to a product.
pub const GENERAL_SUBJECT: &str = "Demande générale";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    RenovationComplete,
    ConstructionNeuve,
    RemplacementUnitaire,
    Reparation,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::RenovationComplete,
        ProjectType::ConstructionNeuve,
        ProjectType::RemplacementUnitaire,
        ProjectType::Reparation,
    ];

    /// Value carried by the `<option>` and sent to the mail template.
    pub fn value(self) -> &'static str {
        match self {
            ProjectType::RenovationComplete => "Rénovation complète",
            ProjectType::ConstructionNeuve => "Construction neuve",
            ProjectType::RemplacementUnitaire => "Remplacement unitaire",
            ProjectType::Reparation => "Réparation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Reparation => "Réparation / SAV",
            other => other.value(),
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.value() == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub user_name: String,
    pub user_phone: String,
    pub user_email: String,
    pub project_type: Option<ProjectType>,
    pub message: String,
}

impl LeadFields {
    /// Name, phone and e-mail are mandatory; the e-mail needs an `@` with
    /// something on both sides.
    pub fn validate(&self) -> Result<(), LeadError> {
        for (name, value) in [
            ("user_name", &self.user_name),
            ("user_phone", &self.user_phone),
            ("user_email", &self.user_email),
        ] {
            if value.trim().is_empty() {
                return Err(LeadError::MissingField(name));
            }
        }

        let email = self.user_email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(LeadError::InvalidEmail(email.to_string())),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Apply the end of a submission attempt to the form contents: a delivered
    /// lead empties the form, anything else leaves it for a retry.
    pub fn settle(&mut self, outcome: &super::SubmitOutcome) {
        if matches!(outcome, super::SubmitOutcome::Delivered) {
            self.clear();
        }
    }
}

/// Variables the EmailJS template is rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub user_name: String,
    pub user_phone: String,
    pub user_email: String,
    pub project_type: String,
    pub message: String,
    pub context_subject: String,
    #[serde(rename = "g-recaptcha-response")]
    pub recaptcha_token: String,
}

/// Body of `POST /api/v1.0/email/send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl EmailRequest {
    pub fn new(config: &SiteConfig, fields: &LeadFields, subject: Option<&str>, token: String) -> Self {
        let subject = subject
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(GENERAL_SUBJECT);

        Self {
            service_id: config.emailjs_service_id.to_string(),
            template_id: config.emailjs_template_id.to_string(),
            user_id: config.emailjs_public_key.to_string(),
            template_params: TemplateParams {
                user_name: fields.user_name.trim().to_string(),
                user_phone: fields.user_phone.trim().to_string(),
                user_email: fields.user_email.trim().to_string(),
                project_type: fields
                    .project_type
                    .map(ProjectType::value)
                    .unwrap_or(UNSPECIFIED_PROJECT)
                    .to_string(),
                message: fields.message.clone(),
                context_subject: subject.to_string(),
                recaptcha_token: token,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SITE;
    use pretty_assertions::assert_eq;

    fn filled() -> LeadFields {
        LeadFields {
            user_name: "Sophie L.".into(),
            user_phone: "06 12 34 56 78".into(),
            user_email: "sophie@example.fr".into(),
            project_type: None,
            message: "Trois fenêtres salon".into(),
        }
    }

    #[test]
    fn blank_required_field_is_reported() {
        let mut fields = filled();
        fields.user_phone = "   ".into();
        assert_eq!(fields.validate(), Err(LeadError::MissingField("user_phone")));
    }

    #[test]
    fn email_without_at_is_rejected() {
        let mut fields = filled();
        fields.user_email = "sophie.example.fr".into();
        assert_eq!(
            fields.validate(),
            Err(LeadError::InvalidEmail("sophie.example.fr".into()))
        );
        fields.user_email = "@example.fr".into();
        assert!(fields.validate().is_err());
    }

    #[test]
    fn message_and_project_type_are_optional() {
        let mut fields = filled();
        fields.message.clear();
        assert_eq!(fields.validate(), Ok(()));
    }

    #[test]
    fn payload_uses_template_field_names() {
        let request = EmailRequest::new(&SITE, &filled(), None, "tok-123".into());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["service_id"], "service_os7pi6x");
        assert_eq!(json["template_id"], "template_knr9ro7");
        assert_eq!(json["user_id"], "Od5g3ybRVdYBOBT53");
        let params = &json["template_params"];
        assert_eq!(params["g-recaptcha-response"], "tok-123");
        assert_eq!(params["project_type"], UNSPECIFIED_PROJECT);
        assert_eq!(params["context_subject"], GENERAL_SUBJECT);
        assert_eq!(params["user_name"], "Sophie L.");
    }

    #[test]
    fn product_subject_is_forwarded() {
        let mut fields = filled();
        fields.project_type = Some(ProjectType::Reparation);
        let request = EmailRequest::new(&SITE, &fields, Some("Pergolas Bioclimatiques"), "t".into());
        assert_eq!(request.template_params.context_subject, "Pergolas Bioclimatiques");
        assert_eq!(request.template_params.project_type, "Réparation");
    }

    #[test]
    fn project_type_option_values_round_trip() {
        for kind in ProjectType::ALL {
            assert_eq!(ProjectType::from_value(kind.value()), Some(kind));
        }
        assert_eq!(ProjectType::from_value(UNSPECIFIED_PROJECT), None);
        assert_eq!(ProjectType::Reparation.label(), "Réparation / SAV");
    }
}

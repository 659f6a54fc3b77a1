// Shared components: page shell, UI primitives, icons, quote form
pub mod icons;
mod footer;
mod lead_form;
mod nav;
mod ui;

pub use footer::Footer;
pub use icons::{Glyph, Icon, Rating};
pub use lead_form::LeadForm;
pub use nav::Nav;
pub use ui::{Button, ButtonVariant, Card, SectionTitle, button_class};

pub mod contact;
pub mod effects;
pub mod fields;
pub mod mailto;
pub mod notification;
pub mod scroll;

pub use contact::{begin, finish, Completion, SubmitPlan, TransportError, CONTACT_RECIPIENT};
pub use fields::{is_valid_email, FieldName, FormFields, ValidationError};
pub use mailto::MailtoLink;
pub use notification::{
    NoticeId, NoticePhase, NotificationSlot, Severity, ShowOutcome, NOTIFICATION_AUTO_DISMISS_MS,
    NOTIFICATION_SLIDE_MS,
};
pub use scroll::{
    active_section, navbar_appearance, navbar_hidden, NavbarAppearance, ScrollState, ScrollUpdate,
};

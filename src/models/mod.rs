pub mod call;
pub mod contact;
pub mod sms;

pub use call::Call;
pub use contact::Contact;
pub use sms::Sms;

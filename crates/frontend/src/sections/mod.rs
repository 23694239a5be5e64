pub mod contact;
pub mod footer;
pub mod hero;

pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;

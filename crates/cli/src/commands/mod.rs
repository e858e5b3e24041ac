pub mod diff;
pub mod inspect;
pub mod timeline;
pub mod verify;
pub mod walk;

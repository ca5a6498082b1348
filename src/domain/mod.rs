pub mod email;

pub use email::EmailRecord;

pub mod record;
pub mod request;

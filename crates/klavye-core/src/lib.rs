pub mod candidates;
pub mod dict;
pub mod encoder;
pub mod layout;
pub mod resolver;
pub mod settings;
pub mod unicode;

pub mod authentication_provider;
pub mod security_context;

pub use authentication_provider::AuthenticationProvider;
#[cfg(test)]
pub use authentication_provider::MockAuthenticationProvider;
pub use security_context::SecurityContext;

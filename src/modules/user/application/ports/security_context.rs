/// Port exposing the principal a transport attached to the current request
pub trait SecurityContext: Send + Sync {
    /// Username of the current principal, if any
    fn current_username(&self) -> Option<String>;
}

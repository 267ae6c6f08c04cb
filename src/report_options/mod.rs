/// Report option domain: vocabularies, the option record and the
/// pure checks applied while resolving it.
pub mod domain;
pub mod services;

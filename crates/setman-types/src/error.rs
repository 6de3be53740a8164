//! Error type shared by the engine and all adapters

pub type SmResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// Setting name is not registered
	NotFound(String),
	/// The store returned a value for a name with no definition (registry/store drift)
	InconsistentState(String),
	/// The setting store could not be reached or rejected the operation
	StoreUnavailable(String),
	/// The setting cache could not be reached or rejected the operation
	CacheUnavailable(String),
	/// The definition restricts providers and `provider` is not one of them
	ProviderNotAllowed { name: String, provider: String },
	PermissionDenied,
	Unauthorized,
	ConfigError(String),
	Parse(String),
}

impl Error {
	/// Transient collaborator failures, as opposed to data or caller errors
	pub fn is_transient(&self) -> bool {
		matches!(self, Error::StoreUnavailable(_) | Error::CacheUnavailable(_))
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::NotFound(name) => write!(f, "Setting '{}' is not defined", name),
			Error::InconsistentState(name) => {
				write!(f, "Store holds a value for undefined setting '{}'", name)
			}
			Error::StoreUnavailable(msg) => write!(f, "Setting store unavailable: {}", msg),
			Error::CacheUnavailable(msg) => write!(f, "Setting cache unavailable: {}", msg),
			Error::ProviderNotAllowed { name, provider } => {
				write!(f, "Provider '{}' is not allowed for setting '{}'", provider, name)
			}
			Error::PermissionDenied => write!(f, "Permission denied"),
			Error::Unauthorized => write!(f, "Unauthorized"),
			Error::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
			Error::Parse(msg) => write!(f, "Parse error: {}", msg),
		}
	}
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		tracing::warn!("serde_json error: {}", err);
		Self::Parse(err.to_string())
	}
}

impl From<serde_yaml::Error> for Error {
	fn from(err: serde_yaml::Error) -> Self {
		tracing::warn!("serde_yaml error: {}", err);
		Self::Parse(err.to_string())
	}
}


// vim: ts=4

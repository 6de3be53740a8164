//! setman-basic - resolve settings from a YAML config
//!
//! ```text
//! SETMAN_CONFIG=./setman.yaml setman-basic global
//! setman-basic tenant <tenant-uuid>
//! setman-basic user <user-uuid>
//! setman-basic scope <provider-name> <provider-key>
//! ```
//!
//! Values listed under `seed:` in the config are written before resolving.

#![forbid(unsafe_code)]

use std::process::ExitCode;
use std::sync::Arc;
use std::{env, path};

use setman_cache_adapter_lru::LruSettingCache;
use setman_core::access::{RequestCtx, SettingPermission};
use setman_core::{ServiceConfig, bootstrap};
use setman_store_adapter_memory::MemorySettingStore;
use setman_types::error::{Error, SmResult};
use setman_types::types::{SettingDto, TenantId, UserId};
use uuid::Uuid;

enum Command {
	Global,
	Tenant(TenantId),
	User(UserId),
	Scope { provider_name: String, provider_key: String },
}

fn parse_uuid(arg: Option<String>) -> SmResult<Uuid> {
	let arg = arg.ok_or_else(|| Error::ConfigError("missing id argument".into()))?;
	Uuid::parse_str(&arg).map_err(|err| Error::Parse(format!("invalid id '{}': {}", arg, err)))
}

fn parse_command(mut args: impl Iterator<Item = String>) -> SmResult<Command> {
	match args.next().as_deref() {
		None | Some("global") => Ok(Command::Global),
		Some("tenant") => Ok(Command::Tenant(TenantId(parse_uuid(args.next())?))),
		Some("user") => Ok(Command::User(UserId(parse_uuid(args.next())?))),
		Some("scope") => {
			let provider_name =
				args.next().ok_or_else(|| Error::ConfigError("missing provider name".into()))?;
			Ok(Command::Scope { provider_name, provider_key: args.next().unwrap_or_default() })
		}
		Some(other) => Err(Error::ConfigError(format!("unknown command '{}'", other))),
	}
}

async fn run(config_path: path::PathBuf, command: Command) -> SmResult<Vec<SettingDto>> {
	let config = ServiceConfig::load(&config_path)?;

	let mut cache = LruSettingCache::new(config.cache.capacity);
	if let Some(ttl) = config.cache.ttl_secs {
		cache = cache.with_ttl(ttl);
	}
	let service =
		bootstrap::build_service(&config, Arc::new(MemorySettingStore::new()), Arc::new(cache))?;
	bootstrap::apply_seed(service.coordinator(), &config.seed).await?;

	// Local runner: whoever can read the config is trusted to read the settings
	let ctx = RequestCtx::anonymous().grant(SettingPermission::Default);
	match command {
		Command::Global => service.get_all_global().await,
		Command::Tenant(tenant_id) => service.get_all_for_tenant(&ctx.with_tenant(tenant_id)).await,
		Command::User(user_id) => service.get_all_for_user(&ctx, user_id).await,
		Command::Scope { provider_name, provider_key } => {
			service.get(&ctx, &provider_name, &provider_key).await
		}
	}
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();

	let config_path =
		path::PathBuf::from(env::var("SETMAN_CONFIG").unwrap_or_else(|_| "./setman.yaml".into()));

	let result = match parse_command(env::args().skip(1)) {
		Ok(command) => run(config_path, command).await,
		Err(err) => Err(err),
	};

	match result.and_then(|settings| Ok(serde_json::to_string_pretty(&settings)?)) {
		Ok(json) => {
			println!("{}", json);
			ExitCode::SUCCESS
		}
		Err(err) => {
			tracing::error!("{}", err);
			ExitCode::FAILURE
		}
	}
}


// vim: ts=4

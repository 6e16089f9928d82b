//! Defaults shared by the Filaship crates.

/// The compose file names looked up in the working directory, in order of
/// preference. The first one is also the name used for newly created files.
pub const COMPOSE_FILE_NAMES: [&str; 2] = ["docker-compose.yml", "docker-compose.yaml"];

/// The `version` written at the top of newly scaffolded compose files.
pub const DEFAULT_COMPOSE_VERSION: &str = "3.8";

/// The container orchestration program invoked by `filaship up`.
pub const DEFAULT_ORCHESTRATOR_PROGRAM: &str = "docker";

/// The project name used when none is given, e.g. when adding services to an
/// existing file that declares no network.
pub const DEFAULT_PROJECT_NAME: &str = "app";

/// The name of the application service that infrastructure services become
/// dependencies of.
pub const APPLICATION_SERVICE_NAME: &str = "app";

/// The restart policy applied to catalog services.
pub const DEFAULT_RESTART_POLICY: &str = "unless-stopped";

/// The driver of named volumes created for catalog services.
pub const DEFAULT_VOLUME_DRIVER: &str = "local";

/// The driver of the project network created by `filaship init`.
pub const DEFAULT_NETWORK_DRIVER: &str = "bridge";

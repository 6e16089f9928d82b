//! The `filaship-compose` crate models a `docker-compose` document and maps
//! it to and from YAML text.
//!
//! Decoding happens in two phases: the text is first decoded into a generic
//! [`serde_yaml::Value`] tree, then the known top-level collections
//! (`services`, `networks`, `volumes`, `configs`, `secrets`) are walked and
//! every entry is turned into a typed component. Keys a component does not
//! understand, or whose value has a shape it does not interpret, are kept
//! verbatim in the component's `extra` mapping and written back on output.
//!
//! # Examples
//!
//! ```
//! use filaship_compose::{ComposeDocument, Service};
//!
//! let mut document = ComposeDocument::from_yaml_str(
//!     "version: '3.8'\nservices:\n  web:\n    image: nginx:alpine\n",
//! )
//! .unwrap();
//!
//! let mut cache = Service::new("redis");
//! cache.image = Some("redis:7-alpine".to_string());
//! let _replaced = document.put_service(cache);
//!
//! assert_eq!(document.service_names(), ["web", "redis"]);
//! let yaml = document.to_yaml().unwrap();
//! assert!(yaml.contains("image: redis:7-alpine"));
//! ```

mod build_config;
mod component;
mod config;
mod document;
mod error;
mod external;
mod fields;
mod network;
mod parser;
mod secret;
mod serializer;
mod service;
mod volume;

pub use self::{
    build_config::{BuildConfig, BuildSource},
    component::Component,
    config::Config,
    document::ComposeDocument,
    error::Error,
    external::External,
    fields::{KeyOrder, StringMap},
    network::Network,
    secret::Secret,
    service::Service,
    volume::Volume,
};
